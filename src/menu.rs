//! The menu-bar command surface.
//!
//! None of these commands have behavior attached yet; they are kept as
//! named, discoverable entry points, and invoking one reports
//! `NotImplemented` instead of silently disappearing.

use core::fmt;

/// Top-level menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Game,
    Network,
    Language,
    Help,
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Menu::File => "File",
            Menu::Game => "Game",
            Menu::Network => "Network",
            Menu::Language => "Language",
            Menu::Help => "Help",
        };
        write!(f, "{}", name)
    }
}

/// Every command reachable from the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    New,
    Load,
    Save,
    Exit,
    Sound,
    Color,
    Host,
    Connect,
    Disconnect,
    English,
    French,
    Rules,
    About,
}

/// Errors returned by menu command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    /// The command exists in the menu but has no behavior attached.
    NotImplemented(MenuCommand),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::NotImplemented(cmd) => write!(f, "{} is not implemented", cmd.label()),
        }
    }
}

impl MenuCommand {
    /// The full command surface, in menu-bar order.
    pub const ALL: [MenuCommand; 13] = [
        MenuCommand::New,
        MenuCommand::Load,
        MenuCommand::Save,
        MenuCommand::Exit,
        MenuCommand::Sound,
        MenuCommand::Color,
        MenuCommand::Host,
        MenuCommand::Connect,
        MenuCommand::Disconnect,
        MenuCommand::English,
        MenuCommand::French,
        MenuCommand::Rules,
        MenuCommand::About,
    ];

    /// The menu this command lives under.
    pub fn menu(self) -> Menu {
        match self {
            MenuCommand::New | MenuCommand::Load | MenuCommand::Save | MenuCommand::Exit => {
                Menu::File
            }
            MenuCommand::Sound | MenuCommand::Color => Menu::Game,
            MenuCommand::Host | MenuCommand::Connect | MenuCommand::Disconnect => Menu::Network,
            MenuCommand::English | MenuCommand::French => Menu::Language,
            MenuCommand::Rules | MenuCommand::About => Menu::Help,
        }
    }

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::New => "New",
            MenuCommand::Load => "Load",
            MenuCommand::Save => "Save",
            MenuCommand::Exit => "Exit",
            MenuCommand::Sound => "Sound",
            MenuCommand::Color => "Color",
            MenuCommand::Host => "Host",
            MenuCommand::Connect => "Connect",
            MenuCommand::Disconnect => "Disconnect",
            MenuCommand::English => "English",
            MenuCommand::French => "French",
            MenuCommand::Rules => "Rules",
            MenuCommand::About => "About",
        }
    }

    /// Look a command up by its label, case-insensitive.
    pub fn from_label(label: &str) -> Option<MenuCommand> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    /// Invoke the command. Every command currently reports
    /// `NotImplemented`; the surface exists so callers can enumerate it.
    pub fn invoke(self) -> Result<(), MenuError> {
        Err(MenuError::NotImplemented(self))
    }
}
