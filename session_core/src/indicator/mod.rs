pub mod asian_session;
