use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use content::{I18n, Translations};
use landing_core::{
    contact_form::{ContactField, ContactFormState, HttpContactTransport},
    Msg, Timeline, UiState,
};
use landing_view::{render_page, PageSnapshot};
use shared::domain::{ItemId, Locale};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one page to HTML.
    Render {
        #[arg(long, default_value = "landscape")]
        layout: landing_core::LayoutClass,
        #[arg(long, default_value = "fr")]
        locale: Locale,
        /// Open this tile; the closed grid when omitted.
        #[arg(long)]
        item: Option<ItemId>,
        #[arg(long, default_value_t = 0)]
        section: usize,
        /// Render the intro instead of the grid.
        #[arg(long)]
        intro: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replay the intro for a click and print every transition.
    Timeline {
        #[arg(long, default_value = "landscape")]
        layout: landing_core::LayoutClass,
        #[arg(long)]
        item: ItemId,
        /// Return to the intro once the tile is open.
        #[arg(long)]
        back: bool,
    },
    /// Submit a contact request to a running relay.
    Submit {
        #[arg(long, default_value = "http://127.0.0.1:3001")]
        api_base: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("warn").init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            layout,
            locale,
            item,
            section,
            intro,
            out,
        } => {
            let state = if intro {
                UiState::new(layout.nominal_viewport())
            } else {
                UiState::settled(layout, item)
            };
            let i18n = I18n::new(Arc::new(Translations::embedded()?), locale);
            let html = render_page(&PageSnapshot::new(state, i18n).with_section(section));
            match out {
                Some(path) => {
                    fs::write(&path, html)?;
                    println!("wrote {}", path.display());
                }
                None => println!("{html}"),
            }
        }
        Command::Timeline { layout, item, back } => {
            let mut timeline = Timeline::new(UiState::new(layout.nominal_viewport()));
            timeline.dispatch(Msg::Click(item))?;
            timeline.run_until_idle();
            if back {
                timeline.dispatch(Msg::BackToIntro)?;
                timeline.run_until_idle();
            }
            for entry in timeline.log() {
                let outcome = match &entry.outcome {
                    Ok(stage) => stage.to_string(),
                    Err(err) => format!("rejected: {err}"),
                };
                let msg = format!("{:?}", entry.msg);
                println!("{:>6} ms  {msg:<40} {outcome}", entry.at.as_millis());
            }
            println!("final: {:?}", timeline.state().scene);
        }
        Command::Submit {
            api_base,
            first_name,
            last_name,
            email,
            phone,
            message,
        } => {
            let transport = HttpContactTransport::new(&api_base)?;
            let mut state = ContactFormState::default();
            state.set_field(ContactField::FirstName, first_name);
            state.set_field(ContactField::LastName, last_name);
            state.set_field(ContactField::Email, email);
            state.set_field(ContactField::Phone, phone);
            state.set_field(ContactField::Message, message);
            if let Err(err) = state.submit(&transport).await {
                bail!("submission failed: {err}");
            }
            println!("sent to {}", transport.endpoint());
        }
    }

    Ok(())
}
