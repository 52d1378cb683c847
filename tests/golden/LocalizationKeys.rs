// This file is auto-generated by csvconst.
// Do not modify this file directly. Changes will be overwritten.

#[allow(non_camel_case_types)]
pub struct LocalizationKeys;

impl LocalizationKeys {
    pub const START_GAME: &'static str = "START_GAME";
    pub const MAIN_MENU_TITLE: &'static str = "main menu / title";
    pub const QUIT: &'static str = "quit";
    pub const QUIT_2: &'static str = "Quit";
    pub const _2P_MODE: &'static str = "2p mode";
    pub const SAY_HI: &'static str = "say \"hi\"";
}
