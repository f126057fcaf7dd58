mod health;
mod rounds;
mod seasons;
mod standings;
