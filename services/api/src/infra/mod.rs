pub mod db;
pub mod gateway;
pub mod sms;
pub mod storage;
