//! Element identifiers of the NetCart checkout page.
//!
//! The catalog builder scans for exactly these ids and classes, and the step
//! compiler targets them when it emits actions.

/// Class shared by every "Add to Cart" button.
pub const ADD_TO_CART_CLASS: &str = "btn-add";

/// Class on each product card container.
pub const PRODUCT_CARD_CLASS: &str = "product-card";

/// Class on inline validation message containers.
pub const INPUT_ERROR_CLASS: &str = "input-error";

pub const APPLY_COUPON_ID: &str = "apply-coupon";
pub const PAY_NOW_ID: &str = "pay-now";
pub const VIEW_CART_ID: &str = "view-cart";

pub const COUPON_ID: &str = "coupon";
pub const NAME_ID: &str = "name";
pub const EMAIL_ID: &str = "email";
pub const ADDRESS_ID: &str = "address";
pub const CARD_NUMBER_ID: &str = "card-number";
pub const UPI_ID: &str = "upi-id";

pub const SHIP_STANDARD_ID: &str = "ship-standard";
pub const SHIP_EXPRESS_ID: &str = "ship-express";
pub const PAY_CARD_ID: &str = "pay-card";

pub const CART_TOTAL_ID: &str = "cart-total";
pub const PAYMENT_RESULT_ID: &str = "payment-result";

/// Buttons looked up by id: (element id, catalog role).
pub const BUTTONS_BY_ID: [(&str, &str); 3] = [
    (APPLY_COUPON_ID, "apply_coupon"),
    (PAY_NOW_ID, "payment"),
    (VIEW_CART_ID, "view_cart"),
];

/// Named input fields: (element id, catalog role).
pub const INPUTS_BY_ID: [(&str, &str); 6] = [
    (COUPON_ID, "coupon_input"),
    (NAME_ID, "customer_name"),
    (EMAIL_ID, "customer_email"),
    (ADDRESS_ID, "shipping_address"),
    (CARD_NUMBER_ID, "card_number"),
    (UPI_ID, "upi_id"),
];

/// Cart summary elements: (element id, catalog role).
pub const CART_SUMMARY_BY_ID: [(&str, &str); 4] = [
    ("cart-items", "cart_items"),
    ("subtotal", "subtotal"),
    ("shipping", "shipping"),
    (CART_TOTAL_ID, "cart_total"),
];

/// Radio group carrying the shipping method.
pub const SHIPPING_GROUP: &str = "shipping";

/// Radio group carrying the payment method.
pub const PAYMENT_GROUP: &str = "payment";
