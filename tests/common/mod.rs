pub mod sound_server;
