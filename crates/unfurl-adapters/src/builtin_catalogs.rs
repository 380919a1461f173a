//! Scaffold catalogues that ship with unfurl.
//!
//! | Name     | Ecosystem                    | Entries |
//! |----------|------------------------------|---------|
//! | `nextjs` | Next.js + Tailwind + TS      | 4       |
//! | `none`   | no scaffold                  | 0       |
//!
//! Contents are written byte-for-byte; nothing is substituted.

use tracing::debug;

use unfurl_core::domain::{DomainError, ScaffoldCatalog, ScaffoldEntry};

/// Name of the catalogue used when none is configured.
pub const DEFAULT_CATALOG: &str = "nextjs";

const PACKAGE_JSON: &str = r#"{
  "name": "taskflow",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start",
    "lint": "next lint"
  },
  "dependencies": {
    "next": "14.2.0",
    "react": "^18.2.0",
    "react-dom": "^18.2.0",
    "lucide-react": "^0.378.0",
    "clsx": "^2.1.1",
    "tailwind-merge": "^2.3.0",
    "date-fns": "^3.6.0"
  },
  "devDependencies": {
    "@types/node": "^20",
    "@types/react": "^18",
    "@types/react-dom": "^18",
    "autoprefixer": "^10.4.19",
    "postcss": "^8.4.38",
    "tailwindcss": "^3.4.3",
    "typescript": "^5"
  }
}"#;

const TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [{ "name": "next" }],
    "paths": { "@/*": ["./*"] }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}"#;

const NEXT_CONFIG_MJS: &str = r#"/** @type {import('next').NextConfig} */
const nextConfig = {};
export default nextConfig;"#;

const POSTCSS_CONFIG_MJS: &str = r#"/** @type {import('postcss-load-config').Config} */
const config = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
export default config;"#;

/// All built-in catalogues.
pub fn all_catalogs() -> Result<Vec<ScaffoldCatalog>, DomainError> {
    let catalogs = vec![nextjs()?, none()];
    debug!(count = catalogs.len(), "built-in catalogues ready");
    Ok(catalogs)
}

/// Build configuration for a Next.js 14 app with Tailwind and TypeScript.
pub fn nextjs() -> Result<ScaffoldCatalog, DomainError> {
    Ok(ScaffoldCatalog::new("nextjs")
        .with_description("Next.js 14 with Tailwind CSS and TypeScript")
        .with_entry(ScaffoldEntry::try_new("package.json", PACKAGE_JSON)?)
        .with_entry(ScaffoldEntry::try_new("tsconfig.json", TSCONFIG_JSON)?)
        .with_entry(ScaffoldEntry::try_new("next.config.mjs", NEXT_CONFIG_MJS)?)
        .with_entry(ScaffoldEntry::try_new("postcss.config.mjs", POSTCSS_CONFIG_MJS)?)
        .with_next_step("cd {dir}")
        .with_next_step("npm install")
        .with_next_step("npm run dev")
        .with_next_step("Then open http://localhost:3000"))
}

/// Writes nothing beyond what the document defines.
pub fn none() -> ScaffoldCatalog {
    ScaffoldCatalog::new("none").with_description("No scaffold files")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nextjs_entries_in_order() {
        let catalog = nextjs().unwrap();
        let paths: Vec<_> = catalog.entries().map(|e| e.path.as_str()).collect();

        assert_eq!(
            paths,
            vec![
                "package.json",
                "tsconfig.json",
                "next.config.mjs",
                "postcss.config.mjs"
            ]
        );
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn nextjs_contents_are_literal() {
        let catalog = nextjs().unwrap();
        let package = catalog
            .entries()
            .find(|e| e.path.as_str() == "package.json")
            .unwrap();

        assert!(package.content.starts_with("{\n  \"name\": \"taskflow\""));
        assert!(package.content.ends_with('}'));
        assert!(package.content.contains("\"next\": \"14.2.0\""));
    }

    #[test]
    fn none_is_empty() {
        assert!(none().is_empty());
    }

    #[test]
    fn default_catalog_is_builtin() {
        let names: Vec<_> = all_catalogs()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert!(names.contains(&DEFAULT_CATALOG.to_string()));
    }
}
