mod test_utils;

mod offer_test;
mod purchase_test;
