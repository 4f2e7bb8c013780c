pub mod sounds;
