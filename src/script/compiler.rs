use crate::catalog::known;
use crate::rules::phrase::{Phrase, Rule, first_rule};
use crate::script::action::{Locator, ScriptAction};
use crate::script::renderer::{ScriptRenderer, SeleniumRenderer};

// ============================================================================
// Step phrase table
// ============================================================================

type ActionBuilder = fn() -> Vec<ScriptAction>;

/// Ordered phrase patterns. The first pattern that holds decides the actions.
const STEP_RULES: &[Rule<ActionBuilder>] = &[
    Rule {
        when: Phrase::Any(&["navigate", "open"]),
        then: navigate,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["add", "click"]), Phrase::Any(&["cart"])]),
        then: add_to_cart,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["coupon"]), Phrase::Any(&["enter", "save15"])]),
        then: enter_coupon,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["apply"]), Phrase::Any(&["coupon"])]),
        then: apply_coupon,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["name"]), Phrase::Any(&["fill", "enter"])]),
        then: fill_name,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["email"]), Phrase::Any(&["fill", "enter"])]),
        then: fill_email,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["address"]), Phrase::Any(&["fill", "enter"])]),
        then: fill_address,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["express"]), Phrase::Any(&["shipping"])]),
        then: select_express_shipping,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["standard"]), Phrase::Any(&["verify", "default"])]),
        then: check_standard_shipping,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["credit", "card"]), Phrase::Any(&["select"])]),
        then: select_card_payment,
    },
    Rule {
        when: Phrase::Any(&["card number", "enter card"]),
        then: fill_card_number,
    },
    Rule {
        when: Phrase::Any(&["pay now"]),
        then: click_pay_now,
    },
    Rule {
        when: Phrase::Either(&[
            Phrase::Any(&["success"]),
            Phrase::All(&[Phrase::Any(&["verify"]), Phrase::Any(&["message"])]),
        ]),
        then: verify_success_message,
    },
    Rule {
        when: Phrase::All(&[Phrase::Any(&["verify"]), Phrase::Any(&["discount", "total"])]),
        then: log_cart_total,
    },
];

const GENERIC_VERIFY: Phrase = Phrase::Any(&["verify"]);

// ============================================================================
// Compilation
// ============================================================================

/// Translate one natural-language step into browser actions.
///
/// Never fails: a step no pattern recognizes becomes a short pause, annotated
/// with the step text unless it is a generic verification.
pub fn compile_step(step: &str) -> Vec<ScriptAction> {
    if let Some(build) = first_rule(STEP_RULES, step) {
        return build();
    }

    let lowered = step.to_lowercase();
    if GENERIC_VERIFY.matches(&lowered) {
        return vec![ScriptAction::Wait {
            ms: 500,
            note: Some("Verification step".to_string()),
        }];
    }

    tracing::debug!(step, "step not recognized, emitting placeholder");
    vec![ScriptAction::Wait {
        ms: 500,
        note: Some(single_line(step)),
    }]
}

/// Compile one step to a Selenium (Python) code fragment.
pub fn compile(step: &str) -> String {
    SeleniumRenderer::default().actions(&compile_step(step))
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Action builders
// ============================================================================

fn navigate() -> Vec<ScriptAction> {
    vec![ScriptAction::Navigate { settle_ms: 1000 }]
}

fn click(binding: &str, locator: Locator, description: &str, settle_ms: u64) -> Vec<ScriptAction> {
    vec![ScriptAction::Click {
        binding: binding.to_string(),
        locator,
        description: description.to_string(),
        settle_ms,
    }]
}

fn fill(
    binding: &str,
    locator: Locator,
    description: &str,
    value: &str,
    settle_ms: u64,
) -> Vec<ScriptAction> {
    vec![ScriptAction::Fill {
        binding: binding.to_string(),
        locator,
        description: description.to_string(),
        value: value.to_string(),
        settle_ms,
    }]
}

fn add_to_cart() -> Vec<ScriptAction> {
    click(
        "add_btn",
        Locator::class(known::ADD_TO_CART_CLASS),
        "Add to Cart button found",
        1000,
    )
}

fn enter_coupon() -> Vec<ScriptAction> {
    fill(
        "coupon_input",
        Locator::id(known::COUPON_ID),
        "Coupon input field found",
        "SAVE15",
        500,
    )
}

fn apply_coupon() -> Vec<ScriptAction> {
    click(
        "apply_btn",
        Locator::id(known::APPLY_COUPON_ID),
        "Apply Coupon button found",
        1000,
    )
}

fn fill_name() -> Vec<ScriptAction> {
    fill("name_input", Locator::id(known::NAME_ID), "Name field found", "John Doe", 0)
}

fn fill_email() -> Vec<ScriptAction> {
    fill(
        "email_input",
        Locator::id(known::EMAIL_ID),
        "Email field found",
        "john.doe@example.com",
        0,
    )
}

fn fill_address() -> Vec<ScriptAction> {
    fill(
        "address_input",
        Locator::id(known::ADDRESS_ID),
        "Address field found",
        "123 Main Street, City, State 12345",
        0,
    )
}

fn select_express_shipping() -> Vec<ScriptAction> {
    click(
        "express_radio",
        Locator::id(known::SHIP_EXPRESS_ID),
        "Express shipping option found",
        500,
    )
}

fn check_standard_shipping() -> Vec<ScriptAction> {
    vec![ScriptAction::AssertSelected {
        binding: "standard_radio".to_string(),
        locator: Locator::id(known::SHIP_STANDARD_ID),
        pass_message: "Standard shipping is selected by default".to_string(),
        fail_message: "Standard shipping should be default".to_string(),
    }]
}

fn select_card_payment() -> Vec<ScriptAction> {
    click(
        "card_radio",
        Locator::id(known::PAY_CARD_ID),
        "Credit card option found",
        500,
    )
}

fn fill_card_number() -> Vec<ScriptAction> {
    fill(
        "card_input",
        Locator::id(known::CARD_NUMBER_ID),
        "Card number field found",
        "4111111111111111",
        0,
    )
}

fn click_pay_now() -> Vec<ScriptAction> {
    click("pay_btn", Locator::id(known::PAY_NOW_ID), "Pay Now button found", 2000)
}

fn verify_success_message() -> Vec<ScriptAction> {
    vec![ScriptAction::AssertText {
        binding: "success_msg".to_string(),
        locator: Locator::id(known::PAYMENT_RESULT_ID),
        description: "Success message found".to_string(),
        expected: "Successful".to_string(),
        pass_message: "Payment success message verified".to_string(),
        fail_message: "Success message not displayed correctly".to_string(),
    }]
}

fn log_cart_total() -> Vec<ScriptAction> {
    vec![ScriptAction::LogText {
        binding: "cart_total".to_string(),
        locator: Locator::id(known::CART_TOTAL_ID),
        label: "Cart total".to_string(),
    }]
}
