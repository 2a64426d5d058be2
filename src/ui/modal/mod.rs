pub mod access_node;
