use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::app::{PlaybackState, Player, PlayerError};
use crate::audio::AudioBackend;
use crate::config::LibrarySettings;
use crate::dialog::FilePicker;
use crate::library::title_from_path;
use crate::ui;

use super::command::Command;

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `label` and read one line of input. `None` means end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Run the menu until the user picks Exit or input ends, then release the backend.
pub fn run<B, P, R, W>(
    player: &mut Player<B>,
    picker: &P,
    library: &LibrarySettings,
    console: &mut Console<R, W>,
) -> io::Result<()>
where
    B: AudioBackend,
    P: FilePicker,
    R: BufRead,
    W: Write,
{
    loop {
        console.say("")?;
        for line in ui::menu_lines() {
            console.say(line)?;
        }

        let flow = match console.ask("Your choice")? {
            None => Flow::Exit,
            Some(choice) => match Command::from_choice(&choice) {
                Some(cmd) => {
                    debug!(?cmd, "menu choice");
                    dispatch(cmd, player, picker, library, console)?
                }
                None => {
                    console.say("Invalid choice. Try again.")?;
                    Flow::Continue
                }
            },
        };

        if let Flow::Exit = flow {
            console.say("Exiting")?;
            player.shutdown();
            return Ok(());
        }
    }
}

fn dispatch<B, P, R, W>(
    cmd: Command,
    player: &mut Player<B>,
    picker: &P,
    library: &LibrarySettings,
    console: &mut Console<R, W>,
) -> io::Result<Flow>
where
    B: AudioBackend,
    P: FilePicker,
    R: BufRead,
    W: Write,
{
    match cmd {
        Command::AddTrack => {
            let Some(title) = console.ask("Track title")? else {
                return Ok(Flow::Exit);
            };
            let Some(path) = console.ask("File path")? else {
                return Ok(Flow::Exit);
            };
            let title = title.trim();
            let result = player
                .add_track(title, path.trim())
                .map(|_| format!("Track '{title}' added to the player"));
            report(console, result)?;
        }
        Command::AddFromDialog => {
            let paths = picker.pick_files();
            if paths.is_empty() {
                console.say("No files selected")?;
            }
            for path in paths {
                let title = title_from_path(&path, library.tag_titles);
                let result = player
                    .add_track(title.as_str(), path)
                    .map(|_| format!("Track '{title}' added to the player"));
                report(console, result)?;
            }
        }
        Command::TogglePlayback => {
            let result = match player.toggle_playback() {
                Ok(PlaybackState::Paused) => Ok("Paused".to_string()),
                Ok(_) => Ok(now_playing(player)),
                Err(e) => Err(e),
            };
            report(console, result)?;
        }
        Command::Next => {
            let result = player.next_track().map(|t| format!("Now playing: {t}"));
            report(console, result)?;
        }
        Command::Previous => {
            let result = player.previous_track().map(|t| format!("Now playing: {t}"));
            report(console, result)?;
        }
        Command::ListTracks => {
            for line in ui::track_lines(player) {
                console.say(line)?;
            }
        }
        Command::CreateCollection => {
            let Some(name) = console.ask("Collection name")? else {
                return Ok(Flow::Exit);
            };
            let name = name.trim();
            let result = player
                .create_collection(name)
                .map(|c| format!("Collection '{}' created", c.name()));
            report(console, result)?;
        }
        Command::AddToCollection => {
            let Some(title) = console.ask("Track title")? else {
                return Ok(Flow::Exit);
            };
            let Some(name) = console.ask("Collection name")? else {
                return Ok(Flow::Exit);
            };
            let (title, name) = (title.trim(), name.trim());
            let result = player
                .add_to_collection(title, name)
                .map(|_| format!("Track '{title}' added to collection '{name}'"));
            report(console, result)?;
        }
        Command::ListCollections => {
            for line in ui::collection_lines(player) {
                console.say(line)?;
            }
        }
        Command::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn now_playing<B: AudioBackend>(player: &Player<B>) -> String {
    match player.current_track() {
        Some(t) => format!("Now playing: {t}"),
        None => "Playing".to_string(),
    }
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: Result<String, PlayerError>,
) -> io::Result<()> {
    match result {
        Ok(msg) => console.say(msg),
        Err(e) => console.say(e),
    }
}
