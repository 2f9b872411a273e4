//! General Discord commands - ping and help.
//! These commands don't touch the database.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Receipt Vault Help**\n\
        Keep your receipts and never miss a warranty deadline.\n\n\
        **Receipts**\n\
        • `/scan <category> [purchase_date] [store] [amount] [warranty_months] [notes] [image]` - Records a receipt.\n\
        • `/vault [category] [search]` - Lists your receipts, newest purchase first.\n\
        • `/receipt <id>` - Shows one receipt in full.\n\
        • `/set_warranty <id> [months]` - Changes or removes a warranty.\n\
        • `/set_purchase_date <id> <date>` - Corrects a purchase date.\n\
        • `/delete_receipt <id>` - Deletes a receipt.\n\n\
        **Warranties**\n\
        • `/home` - Recent receipts and warranties ending soon.\n\
        • `/reminders` - Every running warranty: 🔴 this week, 🟡 this month, 🟢 later.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
