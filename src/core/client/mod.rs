pub mod mongo_client;
