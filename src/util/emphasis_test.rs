use super::*;

fn plain(text: &str) -> Segment {
    Segment {
        text: text.to_owned(),
        emphasized: false,
    }
}

fn bold(text: &str) -> Segment {
    Segment {
        text: text.to_owned(),
        emphasized: true,
    }
}

#[test]
fn empty_input_yields_no_segments() {
    assert_eq!(parse_emphasis(""), vec![]);
}

#[test]
fn text_without_markers_stays_one_plain_segment() {
    assert_eq!(
        parse_emphasis("a noite cai sobre o mar"),
        vec![plain("a noite cai sobre o mar")]
    );
}

#[test]
fn single_pair_is_emphasized() {
    assert_eq!(parse_emphasis("**luar**"), vec![bold("luar")]);
}

#[test]
fn pair_preserves_surrounding_text() {
    assert_eq!(
        parse_emphasis("sob o **luar** do mar"),
        vec![plain("sob o "), bold("luar"), plain(" do mar")]
    );
}

#[test]
fn multiple_pairs_alternate() {
    assert_eq!(
        parse_emphasis("**noite** e **luar**"),
        vec![bold("noite"), plain(" e "), bold("luar")]
    );
}

#[test]
fn unbalanced_marker_stays_plain() {
    assert_eq!(
        parse_emphasis("verso **sem fecho"),
        vec![plain("verso **sem fecho")]
    );
}

#[test]
fn empty_pair_stays_plain() {
    assert_eq!(parse_emphasis("a****b"), vec![plain("a****b")]);
}

#[test]
fn inner_asterisk_disqualifies_the_pair() {
    assert_eq!(parse_emphasis("**a*b**"), vec![plain("**a*b**")]);
}

#[test]
fn invalid_opener_does_not_hide_a_later_pair() {
    assert_eq!(
        parse_emphasis("****bold****"),
        vec![plain("**"), bold("bold"), plain("**")]
    );
}

#[test]
fn line_breaks_pass_through() {
    assert_eq!(
        parse_emphasis("primeiro verso\n**segundo** verso"),
        vec![plain("primeiro verso\n"), bold("segundo"), plain(" verso")]
    );
}

#[test]
fn emphasis_may_span_accented_words() {
    assert_eq!(
        parse_emphasis("meu **coração** canta"),
        vec![plain("meu "), bold("coração"), plain(" canta")]
    );
}

#[test]
fn no_nesting_inner_markers_close_early() {
    // The first balanced pair wins; what remains is scanned independently.
    assert_eq!(
        parse_emphasis("**a** b **c**"),
        vec![bold("a"), plain(" b "), bold("c")]
    );
}
