//! Python snippets run inside the host application.
//!
//! Each snippet reports its outcome through the host's exit status, since
//! the host prints its own noise on stdout.

/// Extension was downloaded and installed.
pub const EXIT_INSTALLED: i32 = 0;
/// Registry reported a failure.
pub const EXIT_FAILED: i32 = 1;
/// Extension was already installed; the registry was not contacted.
pub const EXIT_ALREADY_PRESENT: i32 = 3;
/// Extension module could not be imported.
pub const EXIT_NOT_IMPORTABLE: i32 = 4;
/// Extension module has no such version attribute.
pub const EXIT_NO_ATTRIBUTE: i32 = 5;

/// Prefix of the stdout line carrying an exported version.
pub const VERSION_MARKER: &str = "EXTPROV_VERSION=";

fn py_str(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Install `name` from the extension server unless it is already installed.
pub fn install_extension(name: &str, interactive: bool, restart: bool) -> String {
    format!(
        r#"import slicer
em = slicer.app.extensionsManagerModel()
em.interactive = {interactive}
name = {name}
if em.isExtensionInstalled(name):
    slicer.util.exit({already})
elif em.installExtensionFromServer(name, {restart}):
    slicer.util.exit({installed})
else:
    slicer.util.exit({failed})
"#,
        interactive = py_bool(interactive),
        name = py_str(name),
        restart = py_bool(restart),
        already = EXIT_ALREADY_PRESENT,
        installed = EXIT_INSTALLED,
        failed = EXIT_FAILED,
    )
}

/// Import the extension's module and print its version attribute.
pub fn read_version(module: &str, attribute: &str) -> String {
    format!(
        r#"import importlib
import slicer
try:
    module = importlib.import_module({module})
except Exception:
    slicer.util.exit({not_importable})
else:
    value = getattr(module, {attribute}, None)
    if value is None:
        slicer.util.exit({no_attribute})
    else:
        print({marker} + str(value), flush=True)
        slicer.util.exit(0)
"#,
        module = py_str(module),
        attribute = py_str(attribute),
        marker = py_str(VERSION_MARKER),
        not_importable = EXIT_NOT_IMPORTABLE,
        no_attribute = EXIT_NO_ATTRIBUTE,
    )
}

/// Find the exported version in host stdout.
pub fn parse_version(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix(VERSION_MARKER))
        .map(|v| v.trim().to_string())
}
