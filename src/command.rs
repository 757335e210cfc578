/// The Java application a launcher binary starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Importer,
    ImporterAdmin,
}

/// Fixed `java` invocation for one target. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: &'static str,
    pub jvm_options: &'static [&'static str],
    pub jar: &'static str,
}

pub const IMPORTER: LaunchCommand = LaunchCommand {
    program: "java",
    jvm_options: &["-Xms512m", "-Xmx2048m", "-XX:MaxPermSize=512m"],
    jar: "./lib/SCUOpenBISImporter.jar",
};

// The admin tool runs with the JVM's default heap.
pub const IMPORTER_ADMIN: LaunchCommand = LaunchCommand {
    program: "java",
    jvm_options: &[],
    jar: "./lib/SCUOpenBISImporterAdmin.jar",
};

impl Target {
    pub fn command(self) -> LaunchCommand {
        match self {
            Target::Importer => IMPORTER,
            Target::ImporterAdmin => IMPORTER_ADMIN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Target::Importer => "SCUOpenBISImporter",
            Target::ImporterAdmin => "SCUOpenBISImporterAdmin",
        }
    }
}

impl LaunchCommand {
    /// The command string handed to the shell, e.g.
    /// `java -Xms512m -Xmx2048m -XX:MaxPermSize=512m -jar ./lib/SCUOpenBISImporter.jar`.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.jvm_options.len() + 3);
        parts.push(self.program);
        parts.extend_from_slice(self.jvm_options);
        parts.push("-jar");
        parts.push(self.jar);
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEAP_FLAGS: [&str; 3] = ["-Xms512m", "-Xmx2048m", "-XX:MaxPermSize=512m"];

    #[test]
    fn importer_command_line_is_exact() {
        assert_eq!(
            Target::Importer.command().command_line(),
            "java -Xms512m -Xmx2048m -XX:MaxPermSize=512m -jar ./lib/SCUOpenBISImporter.jar"
        );
    }

    #[test]
    fn admin_command_line_is_exact() {
        assert_eq!(
            Target::ImporterAdmin.command().command_line(),
            "java -jar ./lib/SCUOpenBISImporterAdmin.jar"
        );
    }

    #[test]
    fn heap_flags_only_on_importer() {
        let importer = IMPORTER.command_line();
        let admin = IMPORTER_ADMIN.command_line();
        for flag in HEAP_FLAGS {
            assert!(importer.contains(flag), "importer missing {flag}");
            assert!(!admin.contains(flag), "admin unexpectedly has {flag}");
        }
    }

    #[test]
    fn jvm_options_precede_jar() {
        let line = IMPORTER.command_line();
        let jar_at = line.find("-jar").unwrap();
        for flag in HEAP_FLAGS {
            assert!(line.find(flag).unwrap() < jar_at);
        }
    }
}
