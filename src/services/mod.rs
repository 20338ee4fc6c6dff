pub mod flow_client;
