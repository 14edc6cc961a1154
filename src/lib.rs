pub mod coords;
pub mod draw;
pub mod http_server;
pub mod segment;
pub mod style;
pub mod tile;
