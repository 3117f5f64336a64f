use crate::commands::{print_json, Context};
use crate::util::{format_timestamp, now_utc, parse_contact_id};
use anyhow::Result;
use clap::Args;
use dialkeep_store::repo::ContactNew;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub limit: Option<i64>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

pub fn add_contact(ctx: &Context<'_>, args: AddContactArgs) -> Result<()> {
    let contact = ctx.store.contacts().create(
        now_utc(),
        ContactNew {
            display_name: args.name,
            phone: args.phone,
        },
    )?;

    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("added {} ({})", contact.display_name, contact.id);
    }
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let contacts = ctx.store.contacts().list(args.limit)?;

    if ctx.json {
        print_json(&contacts)?;
        return Ok(());
    }

    if contacts.is_empty() {
        println!("no contacts");
        return Ok(());
    }
    for contact in contacts {
        println!(
            "{}  {}  {}  updated {}",
            contact.id,
            contact.display_name,
            contact.phone.as_deref().unwrap_or("-"),
            format_timestamp(contact.updated_at),
        );
    }
    Ok(())
}

pub fn delete_contact(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    ctx.store.contacts().delete(id)?;
    if !ctx.json {
        println!("deleted {id}");
    }
    Ok(())
}
