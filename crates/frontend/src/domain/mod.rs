pub mod a001_parking_order;
