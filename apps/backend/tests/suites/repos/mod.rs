mod fallback;
mod parity;
mod sea_league;
