//! Dockerfile and docker-compose.yml generators.

use std::path::{Path, PathBuf};

use dbdraw_core::{GeneratedFile, Language};

/// Node 18 image running the API.
pub struct Dockerfile {
    language: Language,
}

impl Dockerfile {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl GeneratedFile for Dockerfile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Dockerfile")
    }

    fn render(&self) -> String {
        let build = match self.language {
            Language::TypeScript => "RUN npm run build\n\n",
            Language::JavaScript => "",
        };
        format!(
            r#"FROM node:18-alpine

WORKDIR /app

COPY package*.json ./
RUN npm install

COPY . .
{}EXPOSE 5000

CMD ["npm", "start"]
"#,
            build
        )
    }
}

/// Compose file wiring the API to a MongoDB container.
pub struct DockerCompose {
    database: String,
}

impl DockerCompose {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
        }
    }
}

impl GeneratedFile for DockerCompose {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("docker-compose.yml")
    }

    fn render(&self) -> String {
        format!(
            r#"services:
  api:
    build: .
    ports:
      - "5000:5000"
    env_file:
      - .env
    environment:
      - MONGODB_URI=mongodb://mongo:27017/{}
    depends_on:
      - mongo

  mongo:
    image: mongo:6
    ports:
      - "27017:27017"
    volumes:
      - mongo-data:/data/db

volumes:
  mongo-data:
"#,
            self.database
        )
    }
}
