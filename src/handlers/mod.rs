pub(crate) mod checkout_handlers;
