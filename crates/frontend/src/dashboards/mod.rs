pub mod d100_daily_summary;
