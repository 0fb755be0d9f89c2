pub mod gateways;
pub mod invoices;
pub mod settings;
pub mod signatures;
pub mod taxes;
pub mod vendors;
