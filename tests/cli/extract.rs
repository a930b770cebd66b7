use std::path::Path;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

const SAMPLE_CLASS: &str = concat!(
    "using System;\n",
    "\n",
    "namespace TestNamespace\n",
    "{\n",
    "    public class TestClass\n",
    "    {\n",
    "        public void TestMethod()\n",
    "        {\n",
    "            var str1 = \"Hello, World!\";\n",
    "            var str2 = \"Another string\";\n",
    "            Console.WriteLine(\"Third string\");\n",
    "\n",
    "            // String in a comment \"Not extracted\"\n",
    "            /* String in a block comment \"Not extracted\" */\n",
    "\n",
    "            var multiLine = @\"This is a \n",
    "multi-line string\";\n",
    "\n",
    "            var interpolated = $\"Value: {42}\";\n",
    "        }\n",
    "    }\n",
    "}\n",
);

#[test]
fn test_single_file() -> Result<()> {
    let test = CliTest::with_file("TestFile.cs", SAMPLE_CLASS)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_output()?,
        json!({
            "TestFile.cs": [
                "Hello, World!",
                "Another string",
                "Third string",
                "This is a \nmulti-line string",
                "Value: {42}"
            ]
        })
    );

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Scanning directory: "));
    assert!(stdout.contains("Found string literals in 1 file (1 scanned)"));
    assert!(stdout.contains("Results written to: "));

    Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("output.json")?, "{}\n");
    assert!(String::from_utf8(output.stdout)?.contains("Found string literals in 0 files"));

    Ok(())
}

#[test]
fn test_files_without_literals_are_omitted() -> Result<()> {
    let test = CliTest::with_file("Empty.cs", "class Empty { int x = 1; }")?;
    test.write_file("Full.cs", r#"class Full { string s = "x"; }"#)?;

    test.extract_command().output()?;

    assert_eq!(test.read_output()?, json!({ "Full.cs": ["x"] }));

    Ok(())
}

#[test]
fn test_nested_directories() -> Result<()> {
    let test = CliTest::with_file(
        "TestFile1.cs",
        r#"
namespace Test
{
    class Program
    {
        static void Main()
        {
            var str = "Root file string";
        }
    }
}"#,
    )?;
    test.write_file(
        "Nested/TestFile2.cs",
        r#"
namespace Test.Nested
{
    class Helper
    {
        public string GetValue()
        {
            return "Nested file string";
        }
    }
}"#,
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let result = test.read_output()?;
    let nested_key = Path::new("Nested").join("TestFile2.cs");
    let nested_key = nested_key.to_string_lossy();

    assert_eq!(result.as_object().map(|o| o.len()), Some(2));
    assert_eq!(result["TestFile1.cs"], json!(["Root file string"]));
    assert_eq!(result[&*nested_key], json!(["Nested file string"]));

    Ok(())
}

#[test]
fn test_report_layout() -> Result<()> {
    let test = CliTest::with_file(
        "Greeter.cs",
        r#"var a = "Hello"; var b = $"X{1+1}Y"; var c = @"C:\temp";"#,
    )?;

    test.extract_command().output()?;

    insta::assert_snapshot!(test.read_file("output.json")?, @r#"
    {
      "Greeter.cs": [
        "Hello",
        "X{1+1}Y",
        "C:\\temp"
      ]
    }
    "#);

    Ok(())
}

#[test]
fn test_build_output_directories_included_by_default() -> Result<()> {
    let test = CliTest::with_file("src/App.cs", r#""app""#)?;
    test.write_file("src/obj/Debug/AssemblyInfo.cs", r#""generated""#)?;
    test.write_file("Tools/bin/Helper.cs", r#""kept""#)?;

    test.extract_command().output()?;

    let result = test.read_output()?;
    assert_eq!(result.as_object().map(|o| o.len()), Some(3));
    let helper = Path::new("Tools").join("bin").join("Helper.cs");
    let helper = helper.to_string_lossy();
    assert_eq!(result[&*helper], json!(["kept"]));

    Ok(())
}

#[test]
fn test_build_output_excluded_through_config() -> Result<()> {
    let test = CliTest::with_file("src/App.cs", r#""app""#)?;
    test.write_file("src/obj/Debug/AssemblyInfo.cs", r#""generated""#)?;
    test.write_file(".cslitrc.json", r#"{ "ignores": ["**/obj/**"] }"#)?;

    test.extract_command().output()?;

    let result = test.read_output()?;
    assert_eq!(result.as_object().map(|o| o.len()), Some(1));

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".cslitrc.json",
        r#"{
         "extensions": ["cs", "csx"],
         "ignores": ["Generated"]
     }"#,
    )?;
    test.write_file("build.csx", r#"Target("default");"#)?;
    test.write_file("Generated/Api.cs", r#""ignored""#)?;

    test.extract_command().output()?;

    assert_eq!(test.read_output()?, json!({ "build.csx": ["default"] }));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".cslitrc.json", r#"{ "ignores": ["**/[bad"] }"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Invalid glob pattern in 'ignores'"));
    assert!(!test.output_exists());

    Ok(())
}

#[test]
fn test_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["-d", "does-not-exist", "-o", "output.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("does not exist"));
    assert!(!test.output_exists());

    Ok(())
}

#[test]
fn test_unreadable_file_is_skipped() -> Result<()> {
    let test = CliTest::with_file("Good.cs", r#""ok""#)?;
    test.write_file("Bad.cs", [0xff, 0xfe, 0x22, 0x00])?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_output()?, json!({ "Good.cs": ["ok"] }));
    assert!(String::from_utf8(output.stderr)?.contains("1 file(s) could not be read"));

    let output = test.extract_command().arg("--verbose").output()?;
    assert!(String::from_utf8(output.stderr)?.contains("Failed to read Bad.cs"));

    Ok(())
}

#[test]
fn test_verbose_notes_default_configuration() -> Result<()> {
    let test = CliTest::with_file("App.cs", r#""x""#)?;

    let output = test.extract_command().arg("-v").output()?;
    assert!(String::from_utf8(output.stderr)?.contains("No .cslitrc.json found"));

    test.write_file(".cslitrc.json", "{}")?;
    let output = test.extract_command().arg("-v").output()?;
    assert!(!String::from_utf8(output.stderr)?.contains("No .cslitrc.json found"));

    Ok(())
}

#[test]
fn test_output_write_failure() -> Result<()> {
    let test = CliTest::with_file("App.cs", r#""x""#)?;
    test.write_file("blocker", "not a directory")?;

    let output = test
        .command()
        .args(["-d", ".", "-o", "blocker/output.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.starts_with("Error: "));
    assert_eq!(test.read_file("blocker")?, "not a directory");

    Ok(())
}

#[test]
fn test_output_inside_scanned_directory_is_not_scanned() -> Result<()> {
    let test = CliTest::with_file("App.cs", r#""x""#)?;

    test.extract_command().output()?;
    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_output()?, json!({ "App.cs": ["x"] }));
    assert!(test.root().join("output.json").exists());

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("--directory <DIRECTORY>"));
    assert!(stdout.contains("--output <OUTPUT>"));

    Ok(())
}
