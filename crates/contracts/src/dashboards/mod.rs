pub mod d400_status_summary;
