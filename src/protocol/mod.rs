pub mod interchange;
