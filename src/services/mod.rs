pub(crate) mod cart_service;
pub(crate) mod order_service;
pub(crate) mod paypal_service;
pub(crate) mod recorder_service;
