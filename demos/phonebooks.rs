use termii::{CreatePhonebook, PhonebookId, PhonebookName, TermiiClient, UpdatePhonebook};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TermiiClient::from_env()?;

    let listed = client.list_phonebooks().await?;
    println!("phonebooks: {}", listed.as_value());

    let name = std::env::var("TERMII_PHONEBOOK_NAME").unwrap_or_else(|_| "Demo".to_owned());
    let created = client
        .create_phonebook(
            CreatePhonebook::new(PhonebookName::new(name.clone())?)
                .description("Created by the termii demo"),
        )
        .await?;
    println!("created: {}", created.as_value());

    // Termii assigns the id; pass it in to rename and then remove the phonebook.
    if let Ok(id) = std::env::var("TERMII_PHONEBOOK_ID") {
        let id = PhonebookId::new(id)?;
        let updated = client
            .update_phonebook(UpdatePhonebook::new(
                id.clone(),
                PhonebookName::new(format!("{name} (renamed)"))?,
            ))
            .await?;
        println!("updated: {}", updated.as_value());

        let deleted = client.delete_phonebook(id).await?;
        println!("deleted: {}", deleted.as_value());
    }

    Ok(())
}
