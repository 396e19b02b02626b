//! Reusable fixtures for CLI tests.

/// Shell script standing in for `dotnet`.
///
/// `build` creates the engine output, `publish` creates a publish directory
/// with managed assemblies, a manifest and native runtimes for every
/// platform. Set `FAKE_FAIL_BUILD` or `FAKE_FAIL_PUBLISH` to make the
/// matching command exit non-zero. Every invocation is appended to
/// `build.log` in the working directory.
pub const FAKE_BUILD_TOOL: &str = r#"#!/bin/sh
set -e
verb="$1"
project="$2"
echo "$verb $project" >> build.log

case "$verb" in
  build)
    if [ -n "$FAKE_FAIL_BUILD" ]; then
      echo "error CS1002: ; expected" >&2
      exit 3
    fi
    mkdir -p TheRealEngine/bin/Debug/net8.0
    echo engine > TheRealEngine/bin/Debug/net8.0/TheRealEngine.dll
    ;;
  publish)
    if [ -n "$FAKE_FAIL_PUBLISH" ]; then
      exit 4
    fi
    out=TestGame/bin/Release/net8.0/publish
    mkdir -p "$out/plugins" "$out/runtimes/linux-x64/native" \
      "$out/runtimes/osx-x64/native" "$out/runtimes/win-x64/native"
    echo game > "$out/Game.dll"
    echo raylib > "$out/Raylib-cs.DLL"
    echo '{"Name":"TestGame"}' > "$out/project.json"
    echo readme > "$out/readme.txt"
    echo plugin > "$out/plugins/Plugin.dll"
    echo so > "$out/runtimes/linux-x64/native/libraylib.so"
    echo dylib > "$out/runtimes/osx-x64/native/libraylib.dylib"
    echo dll > "$out/runtimes/win-x64/native/raylib.dll"
    ;;
  *)
    echo "unknown verb $verb" >&2
    exit 64
    ;;
esac
echo "fake $verb ok"
"#;

/// Native library the fake publish produces for the host platform
pub fn host_native_library() -> &'static str {
    if cfg!(target_os = "macos") {
        "libraylib.dylib"
    } else {
        "libraylib.so"
    }
}

/// Engine build directory relative to the project root
pub const ENGINE_DIR: &str = "TheRealEngine/bin/Debug/net8.0";
