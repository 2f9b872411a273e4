//! Warranty Discord commands - `home` summary and `reminders` board.
//!
//! Both commands sample today's date once and pass it to the core, so every
//! receipt in one reply is measured against the same day.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{dashboard, format, warranty},
        entities::receipt,
        errors::{Error, Result},
    };
    use chrono::NaiveDate;
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    fn warranty_line(receipt: &receipt::Model, today: NaiveDate) -> Result<String> {
        let mut line = format!(
            "**{}** ({})",
            format::display_store_name(receipt),
            receipt.category
        );
        if let Some(status) = warranty::warranty_status(receipt, today) {
            write!(
                line,
                " - {} {} · expires {}",
                format::tier_badge(status.tier),
                format::format_days_left(status.days_remaining),
                format::format_date(status.expiry)
            )?;
        }
        Ok(line)
    }

    /// Shows your recent receipts and warranties ending soon.
    #[poise::command(slash_command)]
    pub async fn home(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let user_id = ctx.author().id.to_string();
        let today = chrono::Local::now().date_naive();

        let summary =
            dashboard::load_home_summary(&data.database, &user_id, today, &data.settings).await?;

        if summary.recent.is_empty() {
            ctx.say("🧾 No receipts yet. Record your first one with `/scan`!")
                .await?;
            return Ok(());
        }

        let mut embed = serenity::CreateEmbed::default()
            .title("🏠 Receipt Vault")
            .description(format!(
                "**{}** recent receipt{} · **{}** warrant{} expiring within {} days",
                summary.recent.len(),
                if summary.recent.len() == 1 { "" } else { "s" },
                summary.upcoming.len(),
                if summary.upcoming.len() == 1 { "y" } else { "ies" },
                summary.window_days
            ))
            .color(0x0034_98DB);

        if !summary.upcoming.is_empty() {
            let mut value = String::new();
            for receipt in &summary.upcoming {
                writeln!(value, "{}", warranty_line(receipt, summary.today)?)?;
            }
            embed = embed.field("🔔 Warranty Expiring Soon", value, false);
        }

        let mut recent = String::new();
        for receipt in &summary.recent {
            writeln!(
                recent,
                "**{}** ({}) - {} on {}",
                format::display_store_name(receipt),
                receipt.category,
                format::format_amount(receipt.amount),
                format::format_date(receipt.purchase_date)
            )?;
        }
        embed = embed.field("🧾 Recent Receipts", recent, false);

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows every running warranty grouped by how soon it ends.
    #[poise::command(slash_command)]
    pub async fn reminders(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let today = chrono::Local::now().date_naive();

        let board = dashboard::load_reminder_board(&ctx.data().database, &user_id, today).await?;

        if board.buckets.is_empty() {
            ctx.say(
                "🔔 No active warranties. Add a warranty length when you `/scan` a receipt to get reminders.",
            )
            .await?;
            return Ok(());
        }

        let mut embed = serenity::CreateEmbed::default()
            .title("🔔 Warranty Reminders")
            .description(format!("As of {}", format::format_date(board.today)))
            .color(0x00E6_7E22);

        for (tier, receipts) in board.buckets.in_display_order() {
            if receipts.is_empty() {
                continue;
            }
            let mut value = String::new();
            for receipt in receipts {
                writeln!(value, "{}", warranty_line(receipt, board.today)?)?;
            }
            embed = embed.field(
                format!("{} {}", format::tier_badge(tier), format::tier_heading(tier)),
                value,
                false,
            );
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
