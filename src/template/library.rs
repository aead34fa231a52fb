use crate::rules::phrase::KeywordSet;
use crate::template::template_model::{TemplateCategory, TestCaseTemplate};

// ============================================================================
// Trigger keywords per feature area
// ============================================================================

pub const COUPON_KEYWORDS: &[&str] = &["coupon", "discount", "save15", "code"];
pub const CART_KEYWORDS: &[&str] = &["cart", "add", "product", "shopping"];
pub const SHIPPING_KEYWORDS: &[&str] = &["shipping", "express", "standard", "delivery"];
pub const PAYMENT_KEYWORDS: &[&str] = &["payment", "pay", "checkout", "card", "paypal", "upi"];
pub const VALIDATION_KEYWORDS: &[&str] = &["validation", "form", "required", "error", "field"];
pub const COMPLETE_FLOW_KEYWORDS: &[&str] = &["complete", "full", "end-to-end", "entire", "whole"];

fn template(
    category: TemplateCategory,
    keywords: &[&str],
    feature: &str,
    scenario: &str,
    steps: &[&str],
    expected_result: &str,
    selectors: &[(&str, &str)],
) -> TestCaseTemplate {
    TestCaseTemplate {
        category,
        trigger_keywords: KeywordSet::new(keywords),
        feature: feature.to_string(),
        scenario: scenario.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        expected_result: expected_result.to_string(),
        selectors_used: selectors
            .iter()
            .map(|(name, locator)| (name.to_string(), locator.to_string()))
            .collect(),
    }
}

// ============================================================================
// Template list
// ============================================================================

/// All checkout templates, in match order:
/// coupon, cart, shipping, payment, validation, complete flow.
pub fn default_templates() -> Vec<TestCaseTemplate> {
    let mut templates = Vec::new();
    templates.extend(coupon_templates());
    templates.extend(cart_templates());
    templates.extend(shipping_templates());
    templates.extend(payment_templates());
    templates.extend(validation_templates());
    templates.extend(complete_flow_templates());
    templates
}

/// Used when no template matches the prompt.
pub fn fallback_template() -> TestCaseTemplate {
    template(
        TemplateCategory::Fallback,
        &[],
        "Checkout System",
        "Verify basic checkout functionality",
        &[
            "Navigate to checkout page",
            "Add product to cart",
            "Fill in shipping details",
            "Select payment method",
            "Complete checkout",
        ],
        "Checkout completes successfully",
        &[
            ("add_to_cart", ".btn-add"),
            ("name", "#name"),
            ("email", "#email"),
            ("pay_now", "#pay-now"),
        ],
    )
}

fn coupon_templates() -> Vec<TestCaseTemplate> {
    vec![
        template(
            TemplateCategory::Coupon,
            COUPON_KEYWORDS,
            "Discount Code",
            "Apply a valid discount code 'SAVE15'",
            &[
                "Navigate to NetCart checkout page",
                "Click 'Add to Cart' button for any product (class='.btn-add')",
                "Verify product appears in cart section (id='cart-items')",
                "Locate coupon input field (id='coupon')",
                "Enter discount code 'SAVE15' in the coupon field",
                "Click 'Apply' button (id='apply-coupon')",
                "Wait for cart total to update",
                "Verify discount is reflected in cart total (id='cart-total')",
            ],
            "Total price is reduced by 15%. Discount applied successfully.",
            &[
                ("coupon_input", "#coupon"),
                ("apply_button", "#apply-coupon"),
                ("add_to_cart", ".btn-add"),
                ("cart_items", "#cart-items"),
                ("cart_total", "#cart-total"),
            ],
        ),
        template(
            TemplateCategory::Coupon,
            COUPON_KEYWORDS,
            "Discount Code",
            "Apply an invalid discount code",
            &[
                "Navigate to checkout page",
                "Add product to cart",
                "Enter invalid code 'INVALID999' in coupon field",
                "Click Apply button",
                "Verify error message is displayed or discount not applied",
            ],
            "Error message displayed or discount not applied. Cart total remains unchanged.",
            &[
                ("coupon_input", "#coupon"),
                ("apply_button", "#apply-coupon"),
                ("cart_total", "#cart-total"),
            ],
        ),
    ]
}

fn cart_templates() -> Vec<TestCaseTemplate> {
    vec![template(
        TemplateCategory::Cart,
        CART_KEYWORDS,
        "Shopping Cart",
        "Add product to cart and verify cart update",
        &[
            "Open NetCart checkout page",
            "Identify product card with class 'product-card'",
            "Click 'Add to Cart' button (class='btn-add') for Wireless Earbuds ($49.99)",
            "Verify cart items section (id='cart-items') displays the product",
            "Verify subtotal (id='subtotal') shows $49.99",
            "Verify cart total (id='cart-total') is updated",
        ],
        "Product successfully added to cart. Subtotal and total display correct amounts.",
        &[
            ("product_card", ".product-card"),
            ("add_button", ".btn-add"),
            ("cart_items", "#cart-items"),
            ("subtotal", "#subtotal"),
            ("cart_total", "#cart-total"),
        ],
    )]
}

fn shipping_templates() -> Vec<TestCaseTemplate> {
    vec![
        template(
            TemplateCategory::Shipping,
            SHIPPING_KEYWORDS,
            "Shipping Method Selection",
            "Select Express Shipping and verify cost",
            &[
                "Navigate to checkout page",
                "Add product to cart",
                "Scroll to shipping options section",
                "Verify Standard (Free) is selected by default (id='ship-standard')",
                "Click Express ($10) radio button (id='ship-express')",
                "Verify shipping cost (id='shipping') updates to '$10' or '10'",
                "Verify total price increases by $10",
            ],
            "Express shipping selected. Shipping cost shows $10. Total price increased by $10.",
            &[
                ("standard_radio", "#ship-standard"),
                ("express_radio", "#ship-express"),
                ("shipping_cost", "#shipping"),
                ("cart_total", "#cart-total"),
            ],
        ),
        template(
            TemplateCategory::Shipping,
            SHIPPING_KEYWORDS,
            "Shipping Method Selection",
            "Verify Standard (Free) shipping is default",
            &[
                "Navigate to checkout page",
                "Verify Standard shipping radio (id='ship-standard') is checked",
                "Verify shipping cost displays 'Free'",
                "Verify no additional shipping charge in total",
            ],
            "Standard shipping is pre-selected. No shipping cost added to total.",
            &[
                ("standard_radio", "#ship-standard"),
                ("shipping_cost", "#shipping"),
            ],
        ),
    ]
}

fn payment_templates() -> Vec<TestCaseTemplate> {
    vec![
        template(
            TemplateCategory::Payment,
            PAYMENT_KEYWORDS,
            "Payment Method Selection",
            "Select Credit/Debit Card payment method",
            &[
                "Navigate to checkout",
                "Scroll to Payment section",
                "Verify Credit/Debit Card is selected by default (id='pay-card')",
                "Verify card number input field is visible (id='card-number')",
                "Enter card number '4111111111111111'",
                "Verify field accepts the input",
            ],
            "Credit card payment selected. Card number field visible and accepts input.",
            &[("card_radio", "#pay-card"), ("card_number", "#card-number")],
        ),
        template(
            TemplateCategory::Payment,
            PAYMENT_KEYWORDS,
            "Payment Method Selection",
            "Switch to PayPal payment method",
            &[
                "Navigate to payment section",
                "Click PayPal radio button (id='pay-paypal')",
                "Verify PayPal note is displayed (id='paypal-note')",
                "Verify note mentions 'redirected to PayPal'",
            ],
            "PayPal selected. Information note displayed about PayPal redirect.",
            &[("paypal_radio", "#pay-paypal"), ("paypal_note", "#paypal-note")],
        ),
        template(
            TemplateCategory::Payment,
            PAYMENT_KEYWORDS,
            "Payment Method Selection",
            "Select UPI payment method",
            &[
                "Navigate to payment section",
                "Click UPI radio button (id='pay-upi')",
                "Verify UPI ID input field appears (id='upi-id')",
                "Enter UPI ID 'testuser@upi'",
                "Verify input is accepted",
            ],
            "UPI selected. UPI ID field visible and accepts input.",
            &[("upi_radio", "#pay-upi"), ("upi_id", "#upi-id")],
        ),
    ]
}

fn validation_templates() -> Vec<TestCaseTemplate> {
    vec![
        template(
            TemplateCategory::Validation,
            VALIDATION_KEYWORDS,
            "Form Validation",
            "Submit form with empty required fields",
            &[
                "Navigate to checkout form",
                "Leave name field (id='name') empty",
                "Leave email field (id='email') empty",
                "Leave address field (id='address') empty",
                "Click 'Pay Now' button (id='pay-now')",
                "Verify error messages appear (id='err-name', id='err-email')",
            ],
            "Form validation prevents submission. Error messages displayed for empty required fields.",
            &[
                ("name", "#name"),
                ("email", "#email"),
                ("address", "#address"),
                ("pay_button", "#pay-now"),
                ("name_error", "#err-name"),
                ("email_error", "#err-email"),
            ],
        ),
        template(
            TemplateCategory::Validation,
            VALIDATION_KEYWORDS,
            "Form Validation",
            "Submit form with invalid email format",
            &[
                "Enter valid name 'John Doe' in name field",
                "Enter invalid email 'notanemail' in email field (id='email')",
                "Enter valid address",
                "Click Pay Now button",
                "Verify email error message displayed (id='err-email')",
            ],
            "Email validation fails. Error message shown: 'Invalid email format' or similar.",
            &[
                ("name", "#name"),
                ("email", "#email"),
                ("address", "#address"),
                ("pay_button", "#pay-now"),
                ("email_error", "#err-email"),
            ],
        ),
    ]
}

fn complete_flow_templates() -> Vec<TestCaseTemplate> {
    vec![template(
        TemplateCategory::CompleteFlow,
        COMPLETE_FLOW_KEYWORDS,
        "Complete Checkout Flow",
        "Complete end-to-end checkout with all steps",
        &[
            "Navigate to NetCart checkout page",
            "Add Wireless Earbuds ($49.99) to cart",
            "Apply coupon code 'SAVE15'",
            "Verify 15% discount applied",
            "Fill in name: 'John Doe'",
            "Fill in email: 'john.doe@example.com'",
            "Fill in address: '123 Main Street, City, State 12345'",
            "Select Express Shipping ($10)",
            "Select Credit Card payment",
            "Enter card number: '4111111111111111'",
            "Click 'Pay Now' button",
            "Wait for payment processing",
            "Verify success message displayed (id='payment-result')",
            "Verify message contains 'Payment Successful!'",
        ],
        "Complete checkout successful. Success message 'Payment Successful! \u{2705}' displayed.",
        &[
            ("add_to_cart", ".btn-add"),
            ("coupon", "#coupon"),
            ("apply_coupon", "#apply-coupon"),
            ("name", "#name"),
            ("email", "#email"),
            ("address", "#address"),
            ("ship_express", "#ship-express"),
            ("pay_card", "#pay-card"),
            ("card_number", "#card-number"),
            ("pay_now", "#pay-now"),
            ("payment_result", "#payment-result"),
        ],
    )]
}
