pub mod d400_service_summary;
