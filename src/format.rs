use url::Url;

const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Full rupee amount with Indian digit grouping: `₹4,50,00,000`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), last_three)
}

/// Crore/lakh shorthand used on cards: `₹4.5 Cr`, `₹85 L`
pub fn format_price_short(price: u64) -> String {
    if price >= CRORE {
        format!("₹{} Cr", two_places(hundredths_of(price, CRORE)))
    } else if price >= LAKH {
        format!("₹{} L", two_places(hundredths_of(price, LAKH)))
    } else {
        format_price(price)
    }
}

/// `price / unit` in hundredths, truncated; widened so no catalog price overflows
fn hundredths_of(price: u64, unit: u64) -> u128 {
    u128::from(price) * 100 / u128::from(unit)
}

/// Render hundredths with at most two decimals and no trailing zeros
fn two_places(hundredths: u128) -> String {
    let (whole, frac) = (hundredths / 100, hundredths % 100);
    match frac {
        0 => whole.to_string(),
        f if f % 10 == 0 => format!("{whole}.{}", f / 10),
        f => format!("{whole}.{f:02}"),
    }
}

/// Click-to-chat link pre-filled with a purchase enquiry
pub fn whatsapp_link(
    number: &str,
    title: &str,
    location: &str,
    price: &str,
) -> Result<Url, url::ParseError> {
    let message = format!(
        "Hello, I want to buy this property:\n\nProperty: {title}\nLocation: {location}\nBudget: {price}\n\nPlease contact me."
    );
    Url::parse_with_params(&format!("https://wa.me/{number}"), &[("text", message)])
}
