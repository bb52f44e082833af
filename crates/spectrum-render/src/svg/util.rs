use std::fmt::Write as _;

pub(crate) fn fmt(v: f64) -> String {
    let mut out = String::new();
    fmt_into(&mut out, v);
    out
}

pub(crate) fn fmt_into(out: &mut String, v: f64) {
    // Shortest round-trippable decimal, without `-0` or float noise from our own arithmetic.
    if !v.is_finite() {
        out.push('0');
        return;
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == -0.0 {
        v = 0.0;
    }

    let _ = write!(out, "{v}");
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_xml_into(&mut out, text);
    out
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_trims_noise_and_negative_zero() {
        assert_eq!(fmt(440.0), "440");
        assert_eq!(fmt(225.5), "225.5");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(1e-12), "0");
        assert_eq!(fmt(99.99999999), "100");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn escape_xml_escapes_markup() {
        assert_eq!(
            escape_xml(r#"R&D <"ops"> 'x'"#),
            "R&amp;D &lt;&quot;ops&quot;&gt; &#39;x&#39;"
        );
        assert_eq!(escape_xml("plain"), "plain");
    }
}
