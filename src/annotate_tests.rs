#[cfg(test)]
mod tests {
    use crate::annotate::{annotate_source, AnnotateResult};
    use crate::config::{PathMode, TaggerOptions};
    use crate::stats::RunStats;

    fn annotate(source: &str, file_path: &str, options: &TaggerOptions) -> Option<AnnotateResult> {
        let stats = RunStats::new();
        annotate_source(source, file_path, options, &stats)
    }

    #[test]
    fn test_button_example() {
        let source = "import React from \"react\";\n\
                      \n\
                      export function App() {\n\
                      \x20 const fn = () => {};\n\
                      \x20 return (\n\
                      \x20       <Button onClick={fn}>Click me</Button>\n\
                      \x20 );\n\
                      }\n";
        let stats = RunStats::new();
        let result = annotate_source(source, "src/App.tsx", &TaggerOptions::default(), &stats)
            .expect("Button must be tagged");

        let block = " data-gm-id=\"src/App.tsx:6:8\" data-gm-name=\"Button\" \
                     data-gm-path=\"src/App.tsx\" data-gm-line=\"6\" data-gm-file=\"App.tsx\" \
                     data-gm-content=\"%7B%22text%22%3A%22Click%20me%22%7D\"";
        let expected = source.replace("<Button", &format!("<Button{}", block));
        assert_eq!(result.code, expected);
        assert_eq!(result.tagged, 1);
        assert_eq!(result.skipped, 0);

        let snap = stats.snapshot();
        assert_eq!(snap.files_seen, 1);
        assert_eq!(snap.files_processed, 1);
        assert_eq!(snap.elements_tagged, 1);
        assert_eq!(snap.elements_skipped, 0);
    }

    #[test]
    fn test_mesh_filtered_by_default() {
        let source = "const scene = <mesh position={[0, 0, 0]} />;\n";
        let stats = RunStats::new();
        let result = annotate_source(source, "src/Scene.tsx", &TaggerOptions::default(), &stats);
        assert!(result.is_none());

        let snap = stats.snapshot();
        assert_eq!(snap.files_processed, 1);
        assert_eq!(snap.elements_tagged, 0);
        assert_eq!(snap.elements_skipped, 1);
    }

    #[test]
    fn test_mesh_tagged_when_filter_disabled() {
        let options = TaggerOptions {
            filter_three_elements: false,
            ..Default::default()
        };
        let source = "const scene = <mesh position={[0, 0, 0]} />;\n";
        let result = annotate(source, "src/Scene.tsx", &options).unwrap();
        assert!(result.code.contains("<mesh data-gm-id=\"src/Scene.tsx:1:14\""));
        assert_eq!(result.tagged, 1);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_fragments_are_transparent() {
        let source = "const el = <React.Fragment><div>x</div></React.Fragment>;\n";
        let stats = RunStats::new();
        let result = annotate_source(source, "src/F.tsx", &TaggerOptions::default(), &stats)
            .expect("the inner div must still be tagged");
        assert!(result.code.contains("<React.Fragment><div data-gm-id="));
        assert!(!result.code.contains("Fragment data-gm"));
        assert_eq!(result.tagged, 1);
        // Fragments are not identifiable components, so nothing is counted.
        assert_eq!(stats.snapshot().elements_skipped, 0);

        let source = "const el = <Fragment><span>y</span></Fragment>;\n";
        let result = annotate(source, "src/F.tsx", &TaggerOptions::default()).unwrap();
        assert!(result.code.contains("<span data-gm-id="));
        assert!(!result.code.contains("<Fragment data-gm"));
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_shorthand_fragment_children_tagged() {
        let source = "const el = <><div>a</div><div>b</div></>;\n";
        let result = annotate(source, "src/F.tsx", &TaggerOptions::default()).unwrap();
        assert_eq!(result.tagged, 2);
        assert_eq!(result.skipped, 0);
        assert!(result.code.starts_with("const el = <><div data-gm-id="));
    }

    #[test]
    fn test_member_style_name() {
        let source = "const el = <UI.Card>body</UI.Card>;\n";
        let result = annotate(source, "src/C.tsx", &TaggerOptions::default()).unwrap();
        assert!(result.code.contains("data-gm-name=\"UI.Card\""));
        assert!(result.code.contains("<UI.Card data-gm-id="));
    }

    #[test]
    fn test_unsupported_name_shapes_untouched() {
        // Deep member chains and namespaced names are skipped without
        // incrementing the skipped counter.
        let source = "const el = <A.B.C attr=\"1\" />;\n";
        let stats = RunStats::new();
        let result = annotate_source(source, "src/X.tsx", &TaggerOptions::default(), &stats);
        assert!(result.is_none());
        assert_eq!(stats.snapshot().elements_skipped, 0);
        assert_eq!(stats.snapshot().files_processed, 1);
    }

    #[test]
    fn test_insertion_after_type_arguments() {
        let source = "const el = <List<string> items={xs} />;\n";
        let result = annotate(source, "src/L.tsx", &TaggerOptions::default()).unwrap();
        assert!(result.code.contains("<List<string> data-gm-id="));
        assert!(!result.code.contains("<List data-gm"));
    }

    #[test]
    fn test_sibling_content_attribution() {
        let source = "const el = <div><span>first</span><span>second</span></div>;\n";
        let result = annotate(source, "src/S.tsx", &TaggerOptions::default()).unwrap();
        // "first" and "second" each land on their own span.
        assert!(result
            .code
            .contains("data-gm-content=\"%7B%22text%22%3A%22first%22%7D\""));
        assert!(result
            .code
            .contains("data-gm-content=\"%7B%22text%22%3A%22second%22%7D\""));
        // The outer div has no literal text of its own.
        assert_eq!(result.code.matches("data-gm-content").count(), 2);
        assert_eq!(result.tagged, 3);
    }

    #[test]
    fn test_content_from_literal_attrs() {
        let source = "const el = <input placeholder=\"Name\" className=\"field\" />;\n";
        let result = annotate(source, "src/I.tsx", &TaggerOptions::default()).unwrap();
        assert!(result.code.contains(
            "data-gm-content=\"%7B%22placeholder%22%3A%22Name%22%2C%22className%22%3A%22field%22%7D\""
        ));
    }

    #[test]
    fn test_no_content_attribute_for_dynamic_only() {
        let source = "const el = <Button onClick={fn}>{label}</Button>;\n";
        let result = annotate(source, "src/B.tsx", &TaggerOptions::default()).unwrap();
        assert!(result.code.contains("data-gm-id="));
        assert!(!result.code.contains("data-gm-content"));
    }

    #[test]
    fn test_facet_subset_keeps_fixed_order() {
        let options = TaggerOptions {
            include_id: false,
            include_path: false,
            include_file: false,
            include_content: false,
            ..Default::default()
        };
        let source = "<div>x</div>;\n";
        let result = annotate(source, "src/D.tsx", &options).unwrap();
        assert!(result.code.contains("<div data-gm-name=\"div\" data-gm-line=\"1\">x</div>"));
    }

    #[test]
    fn test_parse_failure_is_no_change() {
        let source = "const = <div>;\n";
        let stats = RunStats::new();
        let result = annotate_source(source, "src/Bad.tsx", &TaggerOptions::default(), &stats);
        assert!(result.is_none());

        let snap = stats.snapshot();
        assert_eq!(snap.files_seen, 1);
        assert_eq!(snap.files_processed, 0);
    }

    #[test]
    fn test_no_jsx_is_no_change() {
        let source = "export const n = 1;\n";
        let stats = RunStats::new();
        let result = annotate_source(source, "src/n.tsx", &TaggerOptions::default(), &stats);
        assert!(result.is_none());
        assert_eq!(stats.snapshot().files_processed, 1);
    }

    #[test]
    fn test_absolute_path_mode() {
        let options = TaggerOptions {
            path_mode: PathMode::Absolute,
            ..Default::default()
        };
        let source = "<div>x</div>;\n";
        let result = annotate(source, "/work/app/src/D.tsx", &options).unwrap();
        assert!(result
            .code
            .contains("data-gm-path=\"/work/app/src/D.tsx\""));
        assert!(result.code.contains("data-gm-file=\"D.tsx\""));
    }

    #[test]
    fn test_relative_path_mode_with_root() {
        let options = TaggerOptions {
            root: Some("/work/app".to_string()),
            ..Default::default()
        };
        let source = "<div>x</div>;\n";
        let result = annotate(source, "/work/app/src/D.tsx", &options).unwrap();
        assert!(result.code.contains("data-gm-id=\"src/D.tsx:1:0\""));
        assert!(result.code.contains("data-gm-path=\"src/D.tsx\""));
    }

    #[test]
    fn test_custom_prefix() {
        let options = TaggerOptions {
            attribute_prefix: "data-dbg".to_string(),
            ..Default::default()
        };
        let source = "<div>x</div>;\n";
        let result = annotate(source, "src/D.tsx", &options).unwrap();
        assert!(result.code.contains("data-dbg-id="));
        assert!(!result.code.contains("data-gm-"));
    }

    #[test]
    fn test_position_map_reconstructs_original() {
        let source = "const el = <div title=\"t\"><Button>Go</Button></div>;\n";
        let result = annotate(source, "src/P.tsx", &TaggerOptions::default()).unwrap();
        assert_ne!(result.code, source);

        let mut reconstructed = String::new();
        for seg in result.map.segments.iter().filter(|s| !s.inserted) {
            reconstructed.push_str(&result.code[seg.new_start as usize..seg.new_end as usize]);
        }
        assert_eq!(reconstructed, source);

        // Untouched bytes map to themselves.
        for seg in result.map.segments.iter().filter(|s| !s.inserted) {
            for delta in 0..(seg.new_end - seg.new_start) {
                assert_eq!(
                    result.map.original_offset_of(seg.new_start + delta),
                    Some(seg.orig_offset + delta)
                );
            }
        }
    }

    #[test]
    fn test_nested_jsx_in_attribute_value() {
        let source = "const el = <Tooltip content={<span>tip</span>}>hover</Tooltip>;\n";
        let result = annotate(source, "src/T.tsx", &TaggerOptions::default()).unwrap();
        assert!(result.code.contains("<Tooltip data-gm-id="));
        assert!(result.code.contains("<span data-gm-id="));
        assert_eq!(result.tagged, 2);
    }
}
