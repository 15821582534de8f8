// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;

use crate::cmd::cards::add_card;
use crate::cmd::cards::list_cards;
use crate::cmd::immersion::print_weekly_content;
use crate::cmd::quiz::print_quiz;
use crate::cmd::stats::print_collection_stats;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::server::server::start_server;
use crate::types::card::DEFAULT_LANGUAGE;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the JSON API.
    Serve {
        /// Path to the data directory. Defaults to the current directory.
        directory: Option<String>,
        /// Port to listen on. Overrides the config file.
        #[arg(long)]
        port: Option<u16>,
        /// Open the browser once the server is up.
        #[arg(long)]
        open: bool,
    },
    /// Add a flashcard.
    Add {
        /// The prompt side of the card.
        front: String,
        /// The answer side of the card.
        back: String,
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,
        /// Path to the data directory. Defaults to the current directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// List all flashcards.
    List {
        /// Path to the data directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Print a new quiz as JSON.
    Quiz {
        /// Path to the data directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Show this week's immersion reading.
    Immersion {
        /// Path to the data directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Print collection statistics as JSON.
    Stats {
        /// Path to the data directory. Defaults to the current directory.
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            directory,
            port,
            open,
        } => {
            let coll = Collection::new(directory)?;
            let port = port.unwrap_or(coll.config.port);
            let open = open || coll.config.open_browser;
            start_server(coll, port, open).await
        }
        Command::Add {
            front,
            back,
            language,
            directory,
        } => add_card(directory, front, back, language),
        Command::List { directory } => list_cards(directory),
        Command::Quiz { directory } => print_quiz(directory),
        Command::Immersion { directory } => print_weekly_content(directory),
        Command::Stats { directory } => print_collection_stats(directory),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Command::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Command::try_parse_from(["lingodeck", "add", "dog", "cão", "--language", "Portuguese"]);
        match cli {
            Ok(Command::Add {
                front,
                back,
                language,
                directory,
            }) => {
                assert_eq!(front, "dog");
                assert_eq!(back, "cão");
                assert_eq!(language, "Portuguese");
                assert_eq!(directory, None);
            }
            _ => panic!("expected the add command"),
        }
    }

    #[test]
    fn test_parse_serve() {
        let cli = Command::try_parse_from(["lingodeck", "serve", "./data", "--port", "9000"]);
        match cli {
            Ok(Command::Serve {
                directory,
                port,
                open,
            }) => {
                assert_eq!(directory.as_deref(), Some("./data"));
                assert_eq!(port, Some(9000));
                assert!(!open);
            }
            _ => panic!("expected the serve command"),
        }
    }
}
