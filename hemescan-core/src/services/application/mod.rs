pub mod motif_count_service;
