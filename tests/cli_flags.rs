mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn flags_initial_revision_emits_single_include() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("flags")
        .assert()
        .success()
        .stdout(predicate::eq("-IRenderStream/Private\n"));
}

#[test]
fn flags_d3d12_revision_keeps_declared_search_order() {
    let ctx = TestContext::new();

    let expected = "-IRenderStream/Private\n\
                    -I/Engine/Source/Runtime/D3D12RHI/Private\n\
                    -I/Engine/Source/Runtime/D3D12RHI/Public\n\
                    -I/Engine/Source/ThirdParty/Windows/D3DX12/Include\n";

    ctx.cli()
        .args(["flags", "--revision", "d3d12", "--engine-root", "/Engine"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn flags_omit_engine_entries_without_engine_root() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["flags", "--revision", "d3d12"])
        .assert()
        .success()
        .stdout(predicate::eq("-IRenderStream/Private\n"));
}

#[test]
fn flags_engine_root_flag_overrides_target_file() {
    let ctx = TestContext::new();
    let target = ctx.write_target("revision = \"d3d12\"\nengine_root = \"/FromFile\"\n");

    ctx.cli()
        .args(["flags", "--engine-root", "/FromFlag", "--target"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("/FromFlag/Source/Runtime/D3D12RHI/Public"))
        .stdout(predicate::str::contains("/FromFile").not());
}

#[test]
fn flags_report_missing_target_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["flags", "--target", "missing.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Target config not found"));
}
