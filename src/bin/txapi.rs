//! Transifex API CLI binary.
//!
//! A command-line interface for interacting with the Transifex API.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tabled::{Table, Tabled};
use transifex_api::cli::{Cli, Command};
use transifex_api::output::PrettyPrint;
use transifex_api::{
    get_resource_translation, get_translation_strings, update_resource_content, ClientConfig,
    ContentBody, Create, Delete, Get, Language, List, Project, Resource, ResourceContent,
    ResourceDescriptor, TransifexClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();

    let client = match build_client(cli.resource.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Hint: Set TRANSIFEX_PROJECT, TRANSIFEX_USER and TRANSIFEX_PASSWORD environment variables"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(resource: Option<&str>) -> transifex_api::Result<TransifexClient> {
    let mut config = ClientConfig::from_env()?;
    if let Some(slug) = resource {
        config = config.with_resource_name(slug);
    }
    TransifexClient::new(config)
}

async fn run(client: &TransifexClient, cli: Cli) -> transifex_api::Result<()> {
    let json = cli.json;

    match cli.command {
        Command::Project => {
            let project = Project::get(client, ()).await?;
            output_single(&project, json)?;
        }
        Command::Languages => {
            let languages = Language::list(client).await?;
            output_list(&languages, json, |l| LanguageRow::from(l))?;
        }
        Command::Resources => {
            let resources = Resource::list(client).await?;
            output_list(&resources, json, |r| ResourceRow::from(r))?;
        }
        Command::Resource { slug } => {
            let resource = Resource::get(client, slug).await?;
            output_single(&resource, json)?;
        }
        Command::CreateResource {
            slug,
            name,
            i18n_type,
            file,
        } => {
            let mut descriptor = ResourceDescriptor::new(slug, name, i18n_type);
            if let Some(path) = file {
                descriptor = descriptor.with_content(std::fs::read_to_string(path)?);
            }
            let created = Resource::create(client, descriptor).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Command::DeleteResource { slug } => {
            let label = client.resolve_resource(slug.as_deref())?;
            Resource::delete(client, slug).await?;
            eprintln!("Deleted resource '{label}'");
        }
        Command::Translation { lang, mode } => {
            let content = get_resource_translation(client, &lang, None, mode).await?;
            print!("{content}");
        }
        Command::Strings { lang } => {
            let strings = get_translation_strings(client, Some(&lang), None).await?;
            println!("{}", serde_json::to_string_pretty(&strings)?);
        }
        Command::Upload {
            file,
            i18n_type,
            name,
        } => {
            let slug = client.resolve_resource(None)?;
            let data = ResourceContent {
                i18n_type,
                name: name.unwrap_or_else(|| slug.clone()),
                slug,
                content: read_body(&file)?,
            };
            let update = update_resource_content(client, data, None).await?;
            output_single(&update, json)?;
        }
    }
    Ok(())
}

fn read_body(path: &Path) -> transifex_api::Result<ContentBody> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "content".to_string());
    Ok(ContentBody::Bytes {
        file_name,
        data: std::fs::read(path)?,
    })
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> transifex_api::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> transifex_api::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} total", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct LanguageRow {
    code: String,
    coordinators: String,
    reviewers: usize,
    translators: usize,
}

impl From<&Language> for LanguageRow {
    fn from(l: &Language) -> Self {
        Self {
            code: l.language_code.clone(),
            coordinators: l.coordinators.join(", "),
            reviewers: l.reviewers.len(),
            translators: l.translators.len(),
        }
    }
}

#[derive(Tabled)]
struct ResourceRow {
    slug: String,
    name: String,
    #[tabled(rename = "type")]
    i18n_type: String,
    source: String,
}

impl From<&Resource> for ResourceRow {
    fn from(r: &Resource) -> Self {
        Self {
            slug: r.slug.clone(),
            name: r.name.clone(),
            i18n_type: r.i18n_type.clone().unwrap_or_default(),
            source: r.source_language_code.clone().unwrap_or_default(),
        }
    }
}
