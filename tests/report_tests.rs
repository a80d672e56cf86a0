use assert_fs::prelude::*;
use predicates::prelude::*;

const PROJECT_YAML: &str = r#"nome_grupo: Loja Centro
descricao: Reposicao de ferragens
simulacoes:
  - nome_produto: Parafuso
    demanda_anual: 1200
    custo_pedido: 50
    custo_manutencao: 2
    lote_atual_empresa: 50
  - product_name: Porca
    annual_demand: 1000
    order_cost: 100
    holding_cost: 5
"#;

#[test]
fn report_writes_yaml_and_prints_summary() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("project.yaml");
    input.write_str(PROJECT_YAML).unwrap();
    let output = temp.child("report.yaml");
    let output_arg = output.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("optistock");
    cmd.args([
        "report",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output_arg,
        "-d",
        "2026-03-01",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Project: Loja Centro"))
        .stdout(predicate::str::contains("Simulations: 2"))
        .stdout(predicate::str::contains("Current total cost: BRL 1250.00"))
        .stdout(predicate::str::contains("Parafuso | 245 | BRL 760.10"))
        .stdout(predicate::str::contains(format!("Report written to {output_arg}")));

    output.assert(predicate::str::contains("project_name: Loja Centro"));
    output.assert(predicate::str::contains("generated_on:").and(predicate::str::contains("2026-03-01")));
    output.assert(predicate::str::contains("top_savings:"));
    output.assert(predicate::str::contains("product_name: Porca"));
}

#[test]
fn report_names_invalid_product() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("project.yaml");
    input
        .write_str(
            "name: Broken\nsimulations:\n  - product_name: Ghost\n    annual_demand: 100\n    order_cost: 10\n    holding_cost: 0\n",
        )
        .unwrap();
    let output = temp.child("report.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("optistock");
    cmd.args([
        "report",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to build report"))
        .stderr(predicate::str::contains("Ghost"));
    output.assert(predicate::path::missing());
}
