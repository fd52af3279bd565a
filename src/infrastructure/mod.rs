pub mod http_lookup;
