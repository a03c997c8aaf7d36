//! Slash command schema pushed to Discord by the register binary.

use twilight_model::{
    application::{
        command::{Command, CommandType},
        interaction::InteractionContextType,
    },
    oauth::ApplicationIntegrationType,
};
use twilight_util::builder::command::{CommandBuilder, StringBuilder};

use crate::{COMMANDS, CommandMeta};

/// Global command definitions for every registered command.
pub fn command_definitions() -> Vec<Command> {
    COMMANDS.iter().map(command_definition).collect()
}

fn command_definition(meta: &CommandMeta) -> Command {
    CommandBuilder::new(meta.name, meta.desc, CommandType::ChatInput)
        .option(StringBuilder::new(meta.option, meta.option_desc).required(true))
        .integration_types([
            ApplicationIntegrationType::GuildInstall,
            ApplicationIntegrationType::UserInstall,
        ])
        .contexts([
            InteractionContextType::Guild,
            InteractionContextType::BotDm,
            InteractionContextType::PrivateChannel,
        ])
        .build()
}
