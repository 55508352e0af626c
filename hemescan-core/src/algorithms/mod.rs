pub mod motif_scanner;
