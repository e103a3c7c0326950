// Integration tests module

mod integration {
    mod config_test;
    mod dashboard_test;
    mod history_test;
    mod layout_test;
}
