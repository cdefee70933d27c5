mod properties;
mod scenarios;
mod text;
