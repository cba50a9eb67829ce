//! Basic example demonstrating the Transifex API client.
//!
//! Run with:
//! ```
//! TRANSIFEX_PROJECT=my-project TRANSIFEX_USER=api TRANSIFEX_PASSWORD=token \
//!     cargo run --example basic
//! ```

use transifex_api::{
    get_resource_translation, get_translation_strings, Get, Language, List, Project, Resource,
    TransifexClient,
};

#[tokio::main]
async fn main() -> transifex_api::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Transifex client...");
    let mut client = TransifexClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    let project = Project::get(&client, ()).await?;
    println!("\n--- Project ---");
    println!("{} ({})", project.name, project.slug);

    println!("\n--- Languages ---");
    let languages = Language::list(&client).await?;
    for language in &languages {
        println!(
            "  - {} ({} translators)",
            language.language_code,
            language.translators.len()
        );
    }

    println!("\n--- Resources ---");
    let resources = Resource::list(&client).await?;
    for resource in &resources {
        println!(
            "  - {} [{}]",
            resource.slug,
            resource.i18n_type.as_deref().unwrap_or("unknown")
        );
    }

    // Use the first resource as the default for the rest of the calls
    let (Some(first), Some(language)) = (resources.first(), languages.first()) else {
        println!("\nNothing to download.");
        return Ok(());
    };
    client.set_resource_name(first.slug.clone());

    println!("\n--- Translation ({}) ---", language.language_code);
    let content = get_resource_translation(&client, &language.language_code, None, None).await?;
    println!("{} bytes", content.len());

    let strings = get_translation_strings(&client, Some(&language.language_code), None).await?;
    let translated = strings
        .iter()
        .filter(|s| {
            s.get("translation")
                .and_then(|t| t.as_str())
                .is_some_and(|t| !t.is_empty())
        })
        .count();
    println!("{translated}/{} strings translated", strings.len());

    println!("\nDone!");
    Ok(())
}
