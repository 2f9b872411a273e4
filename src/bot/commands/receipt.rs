//! Receipt Discord commands - scanning, browsing and editing receipts.
//!
//! These commands collect form input, hand it to the core receipt and vault modules,
//! and render the results. The command author's Discord ID scopes every lookup.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{
            category::{Category, CategoryFilter},
            format,
            receipt::{self, NewReceipt},
            vault, warranty,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Records a new receipt.
    ///
    /// The purchase date defaults to today. When a warranty length is given the
    /// expiry date is derived from it and the receipt shows up in reminders.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command)]
    pub async fn scan(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Purchase category"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: String,
        #[description = "Purchase date as YYYY-MM-DD (defaults to today)"]
        purchase_date: Option<String>,
        #[description = "Store name"] store: Option<String>,
        #[description = "Amount paid"] amount: Option<f64>,
        #[description = "Warranty length in months"] warranty_months: Option<i32>,
        #[description = "Notes"] notes: Option<String>,
        #[description = "Photo of the receipt"] image: Option<serenity::Attachment>,
    ) -> Result<()> {
        let Ok(category) = category.parse::<Category>() else {
            ctx.say(format!(
                "❌ Unknown category '{category}'. Pick one from the suggestions."
            ))
            .await?;
            return Ok(());
        };

        let today = chrono::Local::now().date_naive();
        let purchase_date = match purchase_date.as_deref().map(format::parse_date) {
            None => today,
            Some(Ok(date)) => date,
            Some(Err(e)) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let new = NewReceipt {
            user_id: ctx.author().id.to_string(),
            store_name: store,
            purchase_date,
            amount,
            category,
            warranty_months,
            notes,
            image_ref: image.map(|attachment| attachment.url),
        };

        let created = match receipt::create_receipt(&ctx.data().database, new).await {
            Ok(created) => created,
            Err(e @ (Error::InvalidAmount { .. } | Error::InvalidWarranty { .. })) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let mut reply = format!(
            "✅ Receipt saved! #{} - {} ({}) {} on {}",
            created.id,
            format::display_store_name(&created),
            created.category,
            format::format_amount(created.amount),
            format::format_date(created.purchase_date)
        );
        if let Some(status) = warranty::warranty_status(&created, today) {
            write!(
                reply,
                "\n🛡️ Warranty until {} ({})",
                format::format_date(status.expiry),
                format::format_days_left(status.days_remaining)
            )?;
        }

        ctx.say(reply).await?;
        Ok(())
    }

    /// Lists your receipts, optionally filtered by category and search text.
    #[poise::command(slash_command)]
    pub async fn vault(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Category to show (defaults to All)"]
        #[autocomplete = "autocomplete::autocomplete_category_filter"]
        category: Option<String>,
        #[description = "Search store names and categories"] search: Option<String>,
    ) -> Result<()> {
        let filter = match category.as_deref().map(str::parse::<CategoryFilter>) {
            None => CategoryFilter::All,
            Some(Ok(filter)) => filter,
            Some(Err(e)) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };
        let query = search.as_deref().map(str::trim).unwrap_or_default();

        let data = ctx.data();
        let receipts = receipt::get_receipts_for_user(&data.database, &ctx.author().id.to_string())
            .await?;
        let filtered = vault::filter_by_category_and_query(&receipts, filter, query);

        if filtered.is_empty() {
            let hint = if query.is_empty() && filter == CategoryFilter::All {
                "Start by recording your first receipt with `/scan`."
            } else {
                "Try adjusting your filters."
            };
            ctx.say(format!("🧾 No receipts found. {hint}")).await?;
            return Ok(());
        }

        let page_size = data.settings.vault.page_size;
        let mut reply = format!("🧾 **Receipt Vault** ({filter})\n");
        for receipt in filtered.iter().take(page_size) {
            write!(reply, "\n{}", format::format_receipt_line(receipt))?;
            if let Some(expiry) = receipt.warranty_expiry {
                write!(reply, " | warranty until {}", format::format_date(expiry))?;
            }
        }
        if filtered.len() > page_size {
            write!(
                reply,
                "\n\n…and {} more. Narrow the list with `category` or `search`.",
                filtered.len() - page_size
            )?;
        }

        ctx.say(reply).await?;
        Ok(())
    }

    /// Shows every detail of one of your receipts.
    #[poise::command(slash_command, rename = "receipt")]
    pub async fn show_receipt(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Receipt number"] id: i64,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let Some(found) = receipt::get_receipt_for_user(&ctx.data().database, &user_id, id).await?
        else {
            ctx.say(format!("❌ Receipt #{id} not found.")).await?;
            return Ok(());
        };

        let today = chrono::Local::now().date_naive();
        let mut details = String::new();
        writeln!(details, "**Category:** {}", found.category)?;
        writeln!(details, "**Amount:** {}", format::format_amount(found.amount))?;
        writeln!(
            details,
            "**Purchased:** {}",
            format::format_date(found.purchase_date)
        )?;
        match warranty::warranty_status(&found, today) {
            Some(status) if status.days_remaining >= 0 => writeln!(
                details,
                "**Warranty:** {} until {} ({})",
                format::tier_badge(status.tier),
                format::format_date(status.expiry),
                format::format_days_left(status.days_remaining)
            )?,
            Some(status) => writeln!(
                details,
                "**Warranty:** expired {}",
                format::format_date(status.expiry)
            )?,
            None => writeln!(details, "**Warranty:** none")?,
        }
        if let Some(notes) = &found.notes {
            writeln!(details, "**Notes:** {notes}")?;
        }

        let mut embed = serenity::CreateEmbed::default()
            .title(format!(
                "🧾 #{} {}",
                found.id,
                format::display_store_name(&found)
            ))
            .description(details)
            .color(0x0034_98DB);
        if let Some(image_ref) = &found.image_ref {
            embed = embed.image(image_ref);
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Changes the warranty length of a receipt. Leave `months` empty to remove it.
    #[poise::command(slash_command)]
    pub async fn set_warranty(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Receipt number"] id: i64,
        #[description = "Warranty length in months"] months: Option<i32>,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let updated =
            match receipt::update_warranty_months(&ctx.data().database, &user_id, id, months)
                .await
            {
                Ok(updated) => updated,
                Err(e @ (Error::ReceiptNotFound { .. } | Error::InvalidWarranty { .. })) => {
                    ctx.say(format!("❌ {e}")).await?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

        let message = updated.warranty_expiry.map_or_else(
            || format!("✅ Removed the warranty from receipt #{id}."),
            |expiry| {
                format!(
                    "✅ Receipt #{id} is now under warranty until {}.",
                    format::format_date(expiry)
                )
            },
        );
        ctx.say(message).await?;
        Ok(())
    }

    /// Corrects the purchase date of a receipt.
    #[poise::command(slash_command)]
    pub async fn set_purchase_date(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Receipt number"] id: i64,
        #[description = "Purchase date as YYYY-MM-DD"] date: String,
    ) -> Result<()> {
        let purchase_date = match format::parse_date(&date) {
            Ok(purchase_date) => purchase_date,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let user_id = ctx.author().id.to_string();
        let updated =
            match receipt::update_purchase_date(&ctx.data().database, &user_id, id, purchase_date)
                .await
            {
                Ok(updated) => updated,
                Err(e @ Error::ReceiptNotFound { .. }) => {
                    ctx.say(format!("❌ {e}")).await?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

        let mut message = format!(
            "✅ Receipt #{id} purchase date set to {}.",
            format::format_date(updated.purchase_date)
        );
        if let Some(expiry) = updated.warranty_expiry {
            write!(message, " Warranty now ends {}.", format::format_date(expiry))?;
        }
        ctx.say(message).await?;
        Ok(())
    }

    /// Deletes one of your receipts.
    #[poise::command(slash_command)]
    pub async fn delete_receipt(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Receipt number"] id: i64,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        match receipt::delete_receipt(&ctx.data().database, &user_id, id).await {
            Ok(()) => ctx.say(format!("🗑️ Deleted receipt #{id}.")).await?,
            Err(e @ Error::ReceiptNotFound { .. }) => ctx.say(format!("❌ {e}")).await?,
            Err(e) => return Err(e),
        };
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
