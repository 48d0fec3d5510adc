/// One entry of the numbered menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    AddTrack,
    AddFromDialog,
    TogglePlayback,
    Next,
    Previous,
    ListTracks,
    CreateCollection,
    AddToCollection,
    ListCollections,
    Exit,
}

impl Command {
    /// Every command in menu order.
    pub const ALL: [Command; 10] = [
        Command::AddTrack,
        Command::AddFromDialog,
        Command::TogglePlayback,
        Command::Next,
        Command::Previous,
        Command::ListTracks,
        Command::CreateCollection,
        Command::AddToCollection,
        Command::ListCollections,
        Command::Exit,
    ];

    /// The menu number the user types for this command.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|&c| c == self)
            .map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::AddTrack => "Add track manually",
            Command::AddFromDialog => "Add tracks from a file dialog",
            Command::TogglePlayback => "Play/Pause",
            Command::Next => "Next track",
            Command::Previous => "Previous track",
            Command::ListTracks => "Show all tracks",
            Command::CreateCollection => "Create collection",
            Command::AddToCollection => "Add track to collection",
            Command::ListCollections => "Show collections",
            Command::Exit => "Exit",
        }
    }

    /// Parse a menu choice such as `"3"`. Surrounding whitespace is ignored.
    pub fn from_choice(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip_through_from_choice() {
        for c in Command::ALL {
            assert_eq!(Command::from_choice(&c.number().to_string()), Some(c));
        }
        assert_eq!(Command::Exit.number(), 10);
    }

    #[test]
    fn from_choice_rejects_out_of_range_and_garbage() {
        assert_eq!(Command::from_choice(" 3 \n"), Some(Command::TogglePlayback));
        assert_eq!(Command::from_choice("0"), None);
        assert_eq!(Command::from_choice("11"), None);
        assert_eq!(Command::from_choice("-1"), None);
        assert_eq!(Command::from_choice("play"), None);
        assert_eq!(Command::from_choice(""), None);
    }
}
