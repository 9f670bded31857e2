mod hud;
mod main_menu;
