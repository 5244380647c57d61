use super::*;

#[test]
fn backend_url_prefers_primary_name() {
    assert_eq!(
        resolve_backend_url(Some("https://api.edubox.test"), Some("https://legacy.test")),
        "https://api.edubox.test"
    );
}

#[test]
fn backend_url_falls_back_to_legacy_alias() {
    assert_eq!(resolve_backend_url(None, Some("https://legacy.test/")), "https://legacy.test");
    assert_eq!(resolve_backend_url(Some("  "), Some("https://legacy.test")), "https://legacy.test");
}

#[test]
fn backend_url_defaults_to_same_origin() {
    assert_eq!(resolve_backend_url(None, None), "");
}

#[test]
fn backend_url_trims_every_trailing_slash() {
    assert_eq!(resolve_backend_url(Some("http://localhost:8001///"), None), "http://localhost:8001");
}

#[test]
fn supabase_requires_both_values() {
    assert_eq!(resolve_supabase(Some("https://x.supabase.co"), None), None);
    assert_eq!(resolve_supabase(None, Some("anon")), None);
    assert_eq!(
        resolve_supabase(Some("https://x.supabase.co/"), Some(" anon ")),
        Some(SupabaseConfig {
            url: "https://x.supabase.co".to_owned(),
            anon_key: "anon".to_owned(),
        })
    );
}

#[test]
fn prefixed_names_back_up_bare_names() {
    assert_eq!(first_set(&[None, Some("https://next.test")]), Some("https://next.test"));
    assert_eq!(first_set(&[Some("https://bare.test"), Some("https://next.test")]), Some("https://bare.test"));
    assert_eq!(first_set(&[Some(" "), None]), None);
}

#[test]
fn prefixed_primary_still_beats_legacy_alias() {
    let primary = first_set(&[None, Some("https://api.edubox.test")]);
    let legacy = first_set(&[Some("https://legacy.test"), None]);
    assert_eq!(resolve_backend_url(primary, legacy), "https://api.edubox.test");
}
