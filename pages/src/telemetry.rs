use once_cell::sync::OnceCell;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Install the console logger and the panic hook.
///
/// Only the first call has an effect.
pub fn init(level: tracing::Level) {
    INSTALLED.get_or_init(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_report_logs_in_timings(false)
            .set_console_config(tracing_wasm::ConsoleConfig::ReportWithoutConsoleColor)
            .set_max_level(level)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
        tracing::debug!(%level, "telemetry installed");
    });
}
