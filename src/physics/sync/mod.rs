pub mod board_sync;
