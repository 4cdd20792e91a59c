use iced::widget::{column, container, mouse_area, text, Column, MouseArea};
use iced::{Alignment, Element, Length, Pixels, Task, Theme};
use iced_aw::Wrap;
use std::sync::mpsc::{self, Receiver};

use hangman_board::asset::{self, AssetError};
use hangman_board::state::{Outcome, Round};
use hangman_board::ui::Painted;
use hangman_board::widget::tile;
use hangman_board::{logging, BoardConfig, GuessTile, ProgressDisplay};

/// Main application state
struct HangmanBoard {
    /// Secret word, guesses and wrong-guess count
    round: Round,
    /// Gallows image and its last painted frame
    gallows: ProgressDisplay,
    gallows_frame: Painted,
    /// One tile per alphabet letter, with matching frames
    tiles: Vec<GuessTile>,
    tile_frames: Vec<Painted>,
    /// Letters reported by tile interaction handlers
    guesses: Receiver<char>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the tile at this index
    TilePressed(usize),
}

/// A missing asset means the board was packaged wrong; stop right away.
fn fatal(err: AssetError) -> ! {
    tracing::error!(path = %err.path().display(), "{}", err);
    std::process::exit(1);
}

impl HangmanBoard {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = BoardConfig::load().unwrap_or_else(|err| {
            tracing::warn!("{}; using default board config", err);
            BoardConfig::default()
        });
        let letters = config.letters();

        let max_stage = asset::discover_stages(&config.asset_dir, &config.gallows_base, &config.extension)
            .unwrap_or(0);

        let report = asset::audit(
            &config.asset_dir,
            &config.gallows_base,
            &config.extension,
            max_stage,
            &letters,
        );
        if !report.is_complete() {
            for path in &report.missing {
                tracing::error!(path = %path.display(), "missing asset");
            }
            std::process::exit(1);
        }

        let gallows = ProgressDisplay::new(&config.gallows_base, &config.asset_dir, &config.extension)
            .unwrap_or_else(|err| fatal(err))
            .with_size(config.gallows_size);

        let (sender, guesses) = mpsc::channel();
        let tiles: Vec<GuessTile> = tile::alphabet(&letters, &config.asset_dir, &config.extension)
            .unwrap_or_else(|err| fatal(err))
            .into_iter()
            .map(|tile| {
                let mut tile = tile.with_size(config.tile_size);
                let sender = sender.clone();
                tile.register_interaction_handler(move |letter| {
                    // Receiver lives as long as the app
                    let _ = sender.send(letter);
                });
                tile
            })
            .collect();

        // The clock is the only entropy source
        let seed = chrono::Utc::now().timestamp_subsec_nanos() as usize;
        let secret = config.pick_word(seed).unwrap_or_else(|| "hangman".to_string());
        tracing::info!(letters = secret.len(), max_stage, "new round");

        let gallows_frame = Painted::new(&gallows);
        let tile_frames = tiles.iter().map(|t| Painted::new(t)).collect();

        (
            HangmanBoard {
                round: Round::new(secret, max_stage),
                gallows,
                gallows_frame,
                tiles,
                tile_frames,
                guesses,
                status: "Pick a letter.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TilePressed(index) => {
                let Some(tile) = self.tiles.get_mut(index) else {
                    return Task::none();
                };

                // The handler reports the pressed tile's letter; reveal that same tile
                if tile.interact() {
                    while let Ok(letter) = self.guesses.try_recv() {
                        self.guess(index, letter);
                    }
                }

                self.repaint();
                Task::none()
            }
        }
    }

    /// Reveal the tile at `index` and apply its letter to the round
    fn guess(&mut self, index: usize, letter: char) {
        if self.round.is_finished() {
            return;
        }

        if let Err(err) = self.tiles[index].reveal() {
            fatal(err);
        }

        let result = match self.round.guess(letter) {
            Outcome::Ignored => Ok(()),
            Outcome::Hit => {
                self.status = format!("'{}' is in the word.", letter);
                Ok(())
            }
            Outcome::Miss(stage) => {
                self.status = format!("'{}' is not in the word.", letter);
                self.gallows.advance_to_stage(stage)
            }
            Outcome::Won => {
                self.status = format!("You won! The word was '{}'.", self.round.secret());
                self.gallows.show_win()
            }
            Outcome::Lost => {
                self.status = format!("Game over! The word was '{}'.", self.round.secret());
                self.gallows.show_lose()
            }
        };

        if let Err(err) = result {
            fatal(err);
        }
    }

    /// Rebuild frames for components that requested a redraw
    fn repaint(&mut self) {
        self.gallows_frame.refresh(&self.gallows);
        for (frame, tile) in self.tile_frames.iter_mut().zip(&self.tiles) {
            frame.refresh(tile);
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let tiles: Vec<Element<Message>> = self
            .tile_frames
            .iter()
            .zip(&self.tiles)
            .enumerate()
            .map(|(index, (frame, tile))| {
                let area: MouseArea<'_, Message> = mouse_area(frame.view());
                if tile.has_handler() && !self.round.is_finished() {
                    area.on_press(Message::TilePressed(index)).into()
                } else {
                    area.into()
                }
            })
            .collect();

        let content: Column<Message> = column![
            self.gallows_frame.view(),
            text(self.round.masked()).size(32),
            Wrap::with_elements(tiles)
                .spacing(Pixels(6.0))
                .line_spacing(Pixels(6.0)),
            text(&self.status).size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    logging::init();

    iced::application("Hangman", HangmanBoard::update, HangmanBoard::view)
        .theme(HangmanBoard::theme)
        .centered()
        .run_with(HangmanBoard::new)
}
