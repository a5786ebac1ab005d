//! `ledgerly ask`: one question to the scripted assistant

use clap::Args;
use tracing::debug;

use crate::assistant::Persona;
use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::Mode;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Ask the business assistant instead of the personal one
    #[arg(short, long)]
    pub business: bool,

    /// The question, exactly as the assistant knows it
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

impl AskArgs {
    pub fn persona(&self) -> Persona {
        Persona::for_mode(if self.business {
            Mode::Business
        } else {
            Mode::Personal
        })
    }

    /// Words joined back into one question
    pub fn question(&self) -> String {
        self.question.join(" ").trim().to_string()
    }
}

pub fn handle_ask_command(args: &AskArgs) -> LedgerlyResult<()> {
    let question = args.question();
    if question.is_empty() {
        return Err(LedgerlyError::Validation("Question cannot be blank".into()));
    }
    let persona = args.persona();
    debug!(?persona, %question, "Answering question");
    println!("{}", persona.reply(&question));
    Ok(())
}
