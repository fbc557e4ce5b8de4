use super::*;
use crate::interpret::{AttributeSpec, InterpretationTable};

fn convert_once(tables: &InterpretationTables, src: &str) -> String {
    Converter::new(tables).convert_str(src)
}

fn vertex_tables(property: &str, attrs: Vec<(&str, AttributeSpec)>) -> InterpretationTables {
    InterpretationTables {
        vertex: InterpretationTable::new().with_property(property, attrs),
        ..InterpretationTables::empty()
    }
}

// ── Passthrough ──────────────────────────────────────────────────────────────

#[test]
fn test_passthrough_is_byte_identical() {
    let tables = InterpretationTables::builtin();
    let src = "digraph G {\r\n\n  // player=0\n  n [player=0\n  a -- b [w=1];\n}";
    assert_eq!(convert_once(&tables, src), src);
}

#[test]
fn test_empty_attribute_list_is_not_rewritten() {
    let tables = InterpretationTables::builtin();
    assert_eq!(convert_once(&tables, "n [];\n"), "n [];\n");
    assert_eq!(convert_once(&tables, "a -> b [ ];\n"), "a -> b [ ];\n");
    assert_eq!(convert_once(&tables, "graph [];"), "graph [];");
}

// ── Vertex lines ─────────────────────────────────────────────────────────────

#[test]
fn test_vertex_player_value_map() {
    let tables = InterpretationTables::builtin();
    assert_eq!(
        convert_once(&tables, "n1 [player=\"0\"];\n"),
        "n1 [label=<>, shape=\"diamond\"];\n"
    );
    assert_eq!(
        convert_once(&tables, "n1 [player=\"1\"];\n"),
        "n1 [label=<>, shape=\"square\"];\n"
    );
    assert_eq!(
        convert_once(&tables, "n1 [player=\"2\"];\n"),
        "n1 [label=<>, shape=\"circle\"];\n"
    );
}

#[test]
fn test_vertex_player_hidden_other_keys_labelled() {
    let tables = InterpretationTables::builtin();
    assert_eq!(
        convert_once(&tables, "  n2 [player=1, owner=0];"),
        "n2 [label=<<FONT COLOR=\"blue\">owner=0</FONT>>, shape=\"square\"];\n"
    );
}

#[test]
fn test_vertex_flag_attribute() {
    let tables = InterpretationTables::empty();
    assert_eq!(
        convert_once(&tables, "n [start];\n"),
        "n [label=<<FONT COLOR=\"blue\">start=true</FONT>>];\n"
    );
}

#[test]
fn test_vertex_html_label_override() {
    let tables = vertex_tables("name", vec![("label", AttributeSpec::template("<<B>{raw_v}</B>>"))]);
    assert_eq!(convert_once(&tables, "v [name=\"x\"];\n"), "v [label=<<B>x</B>>];\n");
}

#[test]
fn test_vertex_plain_label_override_is_quoted() {
    let tables = vertex_tables("title", vec![("label", AttributeSpec::template("T: \"{raw_v}\""))]);
    assert_eq!(
        convert_once(&tables, "v [title=\"a b\"];\n"),
        "v [label=\"T: \\\"a b\\\"\"];\n"
    );
}

#[test]
fn test_vertex_label_override_name_is_case_insensitive() {
    let tables = vertex_tables("p", vec![("Label", AttributeSpec::template("X"))]);
    assert_eq!(convert_once(&tables, "v [p=1];\n"), "v [label=\"X\"];\n");
}

#[test]
fn test_vertex_blank_override_keeps_composite_label() {
    let tables = vertex_tables("p", vec![("label", AttributeSpec::value_map([("*", "   ")]))]);
    assert_eq!(
        convert_once(&tables, "v [p=1];\n"),
        "v [label=<<FONT COLOR=\"blue\">   </FONT>>];\n"
    );
}

#[test]
fn test_vertex_non_label_template_is_unescaped() {
    let tables = vertex_tables("note", vec![("tooltip", AttributeSpec::template("{v}"))]);
    assert_eq!(
        convert_once(&tables, "n [note=\"a<b\"];\n"),
        "n [label=<<FONT COLOR=\"blue\">note=a&lt;b</FONT>>, tooltip=\"a<b\"];\n"
    );
}

#[test]
fn test_vertex_computed_attribute_last_write_wins() {
    let tables = InterpretationTables {
        vertex: InterpretationTable::new()
            .with_property("a", [("color", AttributeSpec::template("red"))])
            .with_property("b", [("color", AttributeSpec::template("blue"))]),
        ..InterpretationTables::empty()
    };
    let out = convert_once(&tables, "n [a=1, b=2];\n");
    assert!(out.ends_with(", color=\"blue\"];\n"), "{out}");
    assert_eq!(out.matches("color=\"").count(), 1);
}

#[test]
fn test_rewritten_crlf_line_ends_with_lf() {
    let tables = InterpretationTables::empty();
    assert_eq!(
        convert_once(&tables, "n [a=1];\r\n"),
        "n [label=<<FONT COLOR=\"blue\">a=1</FONT>>];\n"
    );
}

// ── Edge lines ───────────────────────────────────────────────────────────────

#[test]
fn test_edge_label_shows_value_only() {
    let tables = InterpretationTables::builtin();
    assert_eq!(
        convert_once(&tables, "a->b [label=\"x\"];\n"),
        "a->b  [label=<<FONT COLOR=\"blue\">x</FONT>>];\n"
    );
}

#[test]
fn test_edge_fallback_fragments_and_spacing() {
    let tables = InterpretationTables::builtin();
    assert_eq!(
        convert_once(&tables, "  a  ->  b [label=\"x\", w=3];"),
        "a->b  [label=<<FONT COLOR=\"blue\">x</FONT>, <FONT COLOR=\"red\">w=3</FONT>>];\n"
    );
}

#[test]
fn test_edge_extra_attributes() {
    let tables = InterpretationTables {
        edge: InterpretationTable::new().with_property(
            "w",
            [
                ("penwidth", AttributeSpec::template("{v}")),
                ("color", AttributeSpec::value_map([("1", "red"), ("*", "black")])),
            ],
        ),
        ..InterpretationTables::empty()
    };
    assert_eq!(
        convert_once(&tables, "a->b [w=1];\n"),
        "a->b  [label=<<FONT COLOR=\"blue\">w=1</FONT>>, penwidth=\"1\", color=\"red\"];\n"
    );
}

#[test]
fn test_edge_template_value_is_quote_escaped() {
    let tables = InterpretationTables {
        edge: InterpretationTable::new()
            .with_property("t", [("tooltip", AttributeSpec::template("{v}"))]),
        ..InterpretationTables::empty()
    };
    // `{v}` is quote-escaped on substitution and again on emission.
    let out = convert_once(&tables, "a->b [t=say\"hi];\n");
    assert!(out.contains(r#"tooltip="say\\\"hi""#), "{out}");
}

#[test]
fn test_edge_value_map_output_is_quote_escaped() {
    let tables = InterpretationTables {
        edge: InterpretationTable::new().with_property(
            "w",
            [("tooltip", AttributeSpec::value_map([("*", "say \"hi\"")]))],
        ),
        ..InterpretationTables::empty()
    };
    assert_eq!(
        convert_once(&tables, "a->b [w=1];\n"),
        "a->b  [label=<<FONT COLOR=\"blue\">w=1</FONT>>, tooltip=\"say \\\"hi\\\"\"];\n"
    );
}

#[test]
fn test_edge_raw_placeholder_is_quote_escaped() {
    let tables = InterpretationTables {
        edge: InterpretationTable::new()
            .with_property("t", [("xlabel", AttributeSpec::template("{raw_k}:{raw_v}"))]),
        ..InterpretationTables::empty()
    };
    let out = convert_once(&tables, "a->b [t=x\"y];\n");
    assert!(out.ends_with("xlabel=\"t:x\\\"y\"];\n"), "{out}");
}

// ── Graph lines ──────────────────────────────────────────────────────────────

#[test]
fn test_graph_label_replaced_and_attrs_reemitted() {
    let tables = InterpretationTables::empty();
    assert_eq!(
        convert_once(&tables, "graph [rankdir=LR, label=\"old\"];\n"),
        "graph [label=<<FONT COLOR=\"blue\">rankdir=LR</FONT>, \
         <FONT COLOR=\"red\">label=old</FONT>>, rankdir=LR];\n"
    );
}

#[test]
fn test_graph_keyword_normalised_to_lowercase() {
    let tables = InterpretationTables::empty();
    assert_eq!(
        convert_once(&tables, "GRAPH [a=\"1\"];\n"),
        "graph [label=<<FONT COLOR=\"blue\">a=1</FONT>>, a=\"1\"];\n"
    );
}

#[test]
fn test_graph_computed_attribute_overrides_original() {
    let tables = InterpretationTables {
        graph: InterpretationTable::new().with_property(
            "rankdir",
            [("rankdir", AttributeSpec::value_map([("LR", "TB"), ("*", "LR")]))],
        ),
        ..InterpretationTables::empty()
    };
    assert_eq!(
        convert_once(&tables, "graph [rankdir=LR, nodesep=1];\n"),
        "graph [label=<<FONT COLOR=\"blue\">rankdir=LR</FONT>, \
         <FONT COLOR=\"red\">nodesep=1</FONT>>, nodesep=1, rankdir=\"TB\"];\n"
    );
}

#[test]
fn test_graph_label_template_value_escaped_twice() {
    let tables = InterpretationTables {
        graph: InterpretationTable::new()
            .with_property("name", [("label", AttributeSpec::template("Graph: {v}"))]),
        ..InterpretationTables::empty()
    };
    assert_eq!(
        convert_once(&tables, "graph [name=\"g&1\"];\n"),
        "graph [label=<<FONT COLOR=\"blue\">Graph: g&amp;amp;1</FONT>>, name=\"g&1\"];\n"
    );
}

// ── Colors across lines and runs ─────────────────────────────────────────────

#[test]
fn test_colors_stable_across_lines() {
    let tables = InterpretationTables::empty();
    let out = convert_once(&tables, "a [x=1, y=2];\nb [y=3];\n");
    assert!(out.ends_with("b [label=<<FONT COLOR=\"red\">y=3</FONT>>];\n"), "{out}");
}

#[test]
fn test_eleventh_key_reuses_first_color() {
    let tables = InterpretationTables::empty();
    let attrs: Vec<String> = (0..11).map(|i| format!("k{i}={i}")).collect();
    let out = convert_once(&tables, &format!("n [{}];\n", attrs.join(", ")));
    assert!(out.contains("<FONT COLOR=\"blue\">k0=0</FONT>"), "{out}");
    assert!(out.contains("<FONT COLOR=\"gray\">k9=9</FONT>"), "{out}");
    assert!(out.contains("<FONT COLOR=\"blue\">k10=10</FONT>"), "{out}");
}

#[test]
fn test_fresh_converters_are_isolated() {
    let tables = InterpretationTables::empty();
    assert_eq!(convert_once(&tables, "a [x=1];\n"), convert_once(&tables, "a [x=1];\n"));
    let second = convert_once(&tables, "b [y=1];\n");
    assert!(second.contains("\"blue\">y=1"), "{second}");
}

#[test]
fn test_shared_colors_continue_across_documents() {
    let tables = InterpretationTables::empty();
    let mut first = Converter::new(&tables);
    first.convert_str("a [x=1];\n");
    let colors = first.into_colors();
    assert_eq!(colors.get("x"), Some("blue"));

    let mut second = Converter::with_colors(&tables, colors);
    let out = second.convert_str("b [y=1, x=2];\n");
    assert_eq!(
        out,
        "b [label=<<FONT COLOR=\"red\">y=1</FONT>, <FONT COLOR=\"blue\">x=2</FONT>>];\n"
    );
}

// ── Streaming ────────────────────────────────────────────────────────────────

#[test]
fn test_convert_stream_and_stats() {
    let tables = InterpretationTables::builtin();
    let src = "digraph {\ngraph [name=g];\nv0 [player=0];\nv0 -> v1 [label=\"3\"];\nn [];\n}\n";
    let mut out = Vec::new();
    let mut conv = Converter::new(&tables);
    let stats = conv.convert(src.as_bytes(), &mut out).unwrap();
    assert_eq!(
        stats,
        ConvertStats {
            graph: 1,
            vertices: 1,
            edges: 1,
            passthrough: 3,
        }
    );
    assert_eq!(stats.lines(), 6);
    assert_eq!(stats.rewritten(), 3);
    assert_eq!(String::from_utf8(out).unwrap(), convert_once(&tables, src));
}

#[test]
fn test_not_idempotent() {
    let tables = InterpretationTables::builtin();
    let once = convert_once(&tables, "a->b [label=\"x\"];\n");
    let twice = convert_once(&tables, &once);
    assert_ne!(once, twice);
    assert!(twice.contains("&lt;&lt;FONT"), "{twice}");
}
