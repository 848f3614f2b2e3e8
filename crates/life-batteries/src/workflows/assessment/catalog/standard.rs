use super::super::domain::{AnswerOption, Battery, Question};

pub(super) fn standard_questions() -> Vec<Question> {
    vec![
        // Physical
        Question::new(
            "phys-1",
            Battery::Physical,
            "Sommeil",
            vec![
                AnswerOption::new(
                    "Je dors bien et me réveille reposé(e)",
                    "Exemple : Tu te réveilles naturellement sans réveil, tu te sens en forme dès le matin",
                    6,
                ),
                AnswerOption::new(
                    "Je dors mais ne me sens pas vraiment reposé(e)",
                    "Exemple : Tu dors tes 7-8h mais tu as encore envie de dormir au réveil",
                    4,
                ),
                AnswerOption::new(
                    "J'ai du mal à m'endormir ou je me réveille la nuit",
                    "Exemple : Tu tournes 1h avant de t'endormir, ou tu te réveilles à 3h du matin",
                    2,
                ),
                AnswerOption::new(
                    "Je suis constamment fatigué(e) même après 8h de sommeil",
                    "Exemple : Même après 10h de sommeil, tu te réveilles épuisé(e)",
                    0,
                ),
            ],
        ),
        Question::new(
            "phys-2",
            Battery::Physical,
            "Ton niveau d'énergie dans la journée",
            vec![
                AnswerOption::new(
                    "Stable et suffisant",
                    "Exemple : Tu as de l'énergie de 8h à 20h sans coup de fatigue",
                    6,
                ),
                AnswerOption::new(
                    "Variable, des hauts et des bas",
                    "Exemple : Tu as un coup de mou vers 15h mais ça repasse",
                    4,
                ),
                AnswerOption::new(
                    "Faible dès le matin",
                    "Exemple : Dès le réveil, tu as besoin de café pour démarrer",
                    2,
                ),
                AnswerOption::new(
                    "Épuisé(e) en permanence",
                    "Exemple : Tu carbures au café toute la journée pour tenir debout",
                    0,
                ),
            ],
        ),
        Question::new(
            "phys-3",
            Battery::Physical,
            "Tensions corporelles",
            vec![
                AnswerOption::new(
                    "Rarement ou jamais",
                    "Exemple : Ton corps est souple, détendu, sans douleurs",
                    6,
                ),
                AnswerOption::new(
                    "Occasionnellement (nuque, dos)",
                    "Exemple : Quelques tensions en fin de journée mais ça passe",
                    4,
                ),
                AnswerOption::new(
                    "Fréquemment (maux de tête, tensions)",
                    "Exemple : Nuque raide plusieurs fois par semaine, maux de tête réguliers",
                    2,
                ),
                AnswerOption::new(
                    "Constamment (tout le corps est tendu)",
                    "Exemple : Mâchoires serrées, épaules nouées, dos bloqué en permanence",
                    0,
                ),
            ],
        ),
        Question::new(
            "phys-4",
            Battery::Physical,
            "Ton alimentation et digestion",
            vec![
                AnswerOption::new(
                    "Équilibrée, pas de soucis digestifs",
                    "Exemple : Tu manges sainement, digestion fluide et régulière",
                    6,
                ),
                AnswerOption::new(
                    "Parfois déséquilibrée, légers troubles",
                    "Exemple : Tu sautes parfois des repas, ballonnements occasionnels",
                    4,
                ),
                AnswerOption::new(
                    "Repas sautés, estomac noué fréquent",
                    "Exemple : Tu oublies de manger, ton estomac est souvent noué",
                    2,
                ),
                AnswerOption::new(
                    "Troubles digestifs constants, alimentation chaotique",
                    "Exemple : Estomac douloureux en permanence, tu grignotes n'importe quoi",
                    0,
                ),
            ],
        ),
        Question::new(
            "phys-5",
            Battery::Physical,
            "Ton activité physique",
            vec![
                AnswerOption::new(
                    "Régulière et agréable",
                    "Exemple : Tu bouges 3-4 fois par semaine avec plaisir",
                    6,
                ),
                AnswerOption::new(
                    "Irrégulière mais j'essaie",
                    "Exemple : Tu fais du sport quand tu peux, 1-2 fois par semaine",
                    4,
                ),
                AnswerOption::new(
                    "Presque inexistante",
                    "Exemple : Tu n'as pas bougé depuis des semaines",
                    2,
                ),
                AnswerOption::new(
                    "Impossible, je n'ai aucune énergie",
                    "Exemple : Rien que l'idée de bouger t'épuise",
                    0,
                ),
            ],
        ),
        // Mental
        Question::new(
            "ment-1",
            Battery::Mental,
            "Clarté mentale",
            vec![
                AnswerOption::new(
                    "Je pense clairement et décide facilement",
                    "Exemple : Tes pensées sont claires, tu sais ce que tu veux",
                    6,
                ),
                AnswerOption::new(
                    "Parfois confus(e) mais ça va",
                    "Exemple : Des moments de flou mais tu arrives à te concentrer",
                    4,
                ),
                AnswerOption::new(
                    "Brouillard mental fréquent",
                    "Exemple : Tu as du mal à suivre une conversation, tout est embrouillé",
                    2,
                ),
                AnswerOption::new(
                    "Incapable de penser clairement",
                    "Exemple : Ton esprit est comme 50 onglets ouverts qui bugent",
                    0,
                ),
            ],
        ),
        Question::new(
            "ment-2",
            Battery::Mental,
            "Ruminations",
            vec![
                AnswerOption::new(
                    "Rarement",
                    "Exemple : Ton esprit est calme, tu ne ressasses pas",
                    6,
                ),
                AnswerOption::new(
                    "Occasionnellement",
                    "Exemple : Parfois tu repenses à des choses mais ça passe",
                    4,
                ),
                AnswerOption::new(
                    "Souvent, surtout la nuit",
                    "Exemple : Tu rumines le soir au lit, ça tourne en boucle",
                    2,
                ),
                AnswerOption::new(
                    "En permanence, je n'arrive pas à arrêter",
                    "Exemple : Même pensées qui tournent 24/7, tu ne peux pas les arrêter",
                    0,
                ),
            ],
        ),
        Question::new(
            "ment-3",
            Battery::Mental,
            "Concentration",
            vec![
                AnswerOption::new(
                    "Excellente",
                    "Exemple : Tu te concentres facilement et longtemps",
                    6,
                ),
                AnswerOption::new(
                    "Correcte mais effort nécessaire",
                    "Exemple : Tu dois te forcer mais tu y arrives",
                    4,
                ),
                AnswerOption::new(
                    "Difficile à maintenir",
                    "Exemple : Tu es distrait(e) toutes les 5 minutes",
                    2,
                ),
                AnswerOption::new(
                    "Quasi impossible, je suis dispersé(e)",
                    "Exemple : Tu ne peux même pas lire un email en entier",
                    0,
                ),
            ],
        ),
        Question::new(
            "ment-4",
            Battery::Mental,
            "Prise de décision",
            vec![
                AnswerOption::new(
                    "Rapide et assumée",
                    "Exemple : Tu décides rapidement sans ruminer après",
                    6,
                ),
                AnswerOption::new(
                    "Je prends du temps mais j'y arrive",
                    "Exemple : Tu dois réfléchir mais tu finis par trancher",
                    4,
                ),
                AnswerOption::new(
                    "Paralysie fréquente",
                    "Exemple : Tu mets des heures pour des petites décisions",
                    2,
                ),
                AnswerOption::new(
                    "Incapable de trancher même sur des détails",
                    "Exemple : Même \"Qu'est-ce que je mange ?\" te paralyse",
                    0,
                ),
            ],
        ),
        Question::new(
            "ment-5",
            Battery::Mental,
            "Mémoire",
            vec![
                AnswerOption::new(
                    "Très bonne",
                    "Exemple : Tu te souviens facilement de ce qu'on te dit",
                    6,
                ),
                AnswerOption::new(
                    "Quelques trous occasionnels",
                    "Exemple : Parfois tu oublies où sont tes clés",
                    4,
                ),
                AnswerOption::new(
                    "Trous de mémoire fréquents",
                    "Exemple : Tu oublies régulièrement ce que tu devais faire",
                    2,
                ),
                AnswerOption::new(
                    "Perte de mémoire immédiate inquiétante",
                    "Exemple : On te dit quelque chose, 2 min après tu as oublié",
                    0,
                ),
            ],
        ),
        // Emotional
        Question::new(
            "emot-1",
            Battery::Emotional,
            "État émotionnel général",
            vec![
                AnswerOption::new(
                    "Équilibré, je ressens mes émotions",
                    "Exemple : Tu accueilles tristesse, joie, colère sans te laisser submerger",
                    6,
                ),
                AnswerOption::new(
                    "Variable, parfois submergé(e)",
                    "Exemple : Ça va globalement mais parfois c'est trop intense",
                    4,
                ),
                AnswerOption::new(
                    "Engourdissement ou hypersensibilité",
                    "Exemple : Soit tu ne ressens rien, soit tu pleures pour un rien",
                    2,
                ),
                AnswerOption::new(
                    "Vide total ou crises émotionnelles fréquentes",
                    "Exemple : Tu oscilles entre vide absolu et crises de larmes incontrôlables",
                    0,
                ),
            ],
        ),
        Question::new(
            "emot-2",
            Battery::Emotional,
            "Pleurs spontanés",
            vec![
                AnswerOption::new(
                    "Jamais ou rarement",
                    "Exemple : Tu pleures quand c'est vraiment nécessaire",
                    6,
                ),
                AnswerOption::new(
                    "Occasionnellement pour des raisons claires",
                    "Exemple : Tu pleures quand quelque chose te touche vraiment",
                    4,
                ),
                AnswerOption::new(
                    "Souvent \"pour rien\"",
                    "Exemple : Une pub à la TV te fait pleurer",
                    2,
                ),
                AnswerOption::new(
                    "Incontrôlables et fréquents",
                    "Exemple : Tu pleures plusieurs fois par jour sans savoir pourquoi",
                    0,
                ),
            ],
        ),
        Question::new(
            "emot-3",
            Battery::Emotional,
            "Irritabilité",
            vec![
                AnswerOption::new(
                    "Rarement irrité(e)",
                    "Exemple : Tu es patient(e) avec les autres",
                    6,
                ),
                AnswerOption::new(
                    "Parfois agacé(e)",
                    "Exemple : Quelques moments d'agacement normal",
                    4,
                ),
                AnswerOption::new(
                    "Souvent irritable avec les proches",
                    "Exemple : Tu t'énerves facilement sur tes proches",
                    2,
                ),
                AnswerOption::new(
                    "Explosions de colère inhabituelles",
                    "Exemple : Tu exploses pour un rien puis tu culpabilises",
                    0,
                ),
            ],
        ),
        Question::new(
            "emot-4",
            Battery::Emotional,
            "Joie et plaisir",
            vec![
                AnswerOption::new(
                    "Je ressens de la joie régulièrement",
                    "Exemple : Tu ris authentiquement, tu vibres naturellement",
                    6,
                ),
                AnswerOption::new(
                    "Moins qu'avant mais ça existe",
                    "Exemple : Tu as des moments de joie mais c'est rare",
                    4,
                ),
                AnswerOption::new(
                    "Rare, difficile à ressentir",
                    "Exemple : Tu as du mal à te souvenir de ta dernière joie",
                    2,
                ),
                AnswerOption::new(
                    "Plus aucune joie, vide complet",
                    "Exemple : Tu ne ressens plus rien, même ce que tu aimais avant",
                    0,
                ),
            ],
        ),
        Question::new(
            "emot-5",
            Battery::Emotional,
            "Anxiété",
            vec![
                AnswerOption::new(
                    "Calme la plupart du temps",
                    "Exemple : Tu es serein(e), confiant(e)",
                    6,
                ),
                AnswerOption::new(
                    "Stress occasionnel gérable",
                    "Exemple : Du stress normal avant un événement important",
                    4,
                ),
                AnswerOption::new(
                    "Anxiété fréquente",
                    "Exemple : Boule au ventre plusieurs fois par semaine",
                    2,
                ),
                AnswerOption::new(
                    "Crises d'angoisse, sentiment d'effondrement",
                    "Exemple : Sensation de panique, cœur qui bat fort, difficulté à respirer",
                    0,
                ),
            ],
        ),
        // Identity
        Question::new(
            "iden-1",
            Battery::Identity,
            "Connaissance de soi",
            vec![
                AnswerOption::new(
                    "Je sais clairement qui je suis",
                    "Exemple : Tu connais tes valeurs, tes forces, ce qui t'anime",
                    6,
                ),
                AnswerOption::new(
                    "Globalement oui, quelques doutes",
                    "Exemple : Tu te connais assez bien mais pas tout",
                    4,
                ),
                AnswerOption::new(
                    "Je me pose beaucoup de questions",
                    "Exemple : Tu te demandes souvent \"Qui suis-je vraiment ?\"",
                    2,
                ),
                AnswerOption::new(
                    "Je ne me reconnais plus du tout",
                    "Exemple : Tu as l'impression d'être devenu(e) un étranger pour toi-même",
                    0,
                ),
            ],
        ),
        Question::new(
            "iden-2",
            Battery::Identity,
            "Authenticité",
            vec![
                AnswerOption::new(
                    "Je suis moi-même en toutes circonstances",
                    "Exemple : Tu es la même personne partout, tu ne portes pas de masque",
                    6,
                ),
                AnswerOption::new(
                    "Je m'adapte mais reste authentique",
                    "Exemple : Tu t'adaptes au contexte mais sans te trahir",
                    4,
                ),
                AnswerOption::new(
                    "Je porte souvent un masque social",
                    "Exemple : Tu es différent(e) au travail, avec ta famille, avec tes amis",
                    2,
                ),
                AnswerOption::new(
                    "Je fais semblant en permanence",
                    "Exemple : Tu joues un rôle constamment, tu ne sais plus qui tu es vraiment",
                    0,
                ),
            ],
        ),
        Question::new(
            "iden-3",
            Battery::Identity,
            "Sens de ta vie",
            vec![
                AnswerOption::new(
                    "Claire et inspirante",
                    "Exemple : Tu sais pourquoi tu es là, tu as une mission claire",
                    6,
                ),
                AnswerOption::new(
                    "Présente mais floue",
                    "Exemple : Tu as une idée générale mais pas très précise",
                    4,
                ),
                AnswerOption::new(
                    "Perdue, je cherche",
                    "Exemple : Tu cherches ton sens sans vraiment trouver",
                    2,
                ),
                AnswerOption::new(
                    "Aucun sens, \"à quoi bon ?\"",
                    "Exemple : Tu te demandes pourquoi tu continues, tout semble vide",
                    0,
                ),
            ],
        ),
        Question::new(
            "iden-4",
            Battery::Identity,
            "Alignement valeurs/vie",
            vec![
                AnswerOption::new(
                    "Total alignement",
                    "Exemple : Ta vie reflète parfaitement tes valeurs",
                    6,
                ),
                AnswerOption::new(
                    "Globalement aligné(e)",
                    "Exemple : La plupart de tes choix respectent tes valeurs",
                    4,
                ),
                AnswerOption::new(
                    "Décalage important",
                    "Exemple : Tu fais beaucoup de choses qui ne te ressemblent pas",
                    2,
                ),
                AnswerOption::new(
                    "Je vis une vie qui n'est pas la mienne",
                    "Exemple : Ta vie ne te ressemble pas du tout, tu vis pour les autres",
                    0,
                ),
            ],
        ),
        Question::new(
            "iden-5",
            Battery::Identity,
            "Syndrome de l'imposteur",
            vec![
                AnswerOption::new(
                    "Je connais ma valeur",
                    "Exemple : Tu es confiant(e) en tes compétences et ta légitimité",
                    6,
                ),
                AnswerOption::new(
                    "Doutes occasionnels",
                    "Exemple : Parfois tu doutes mais tu te rassures",
                    4,
                ),
                AnswerOption::new(
                    "Fréquent, je me sens illégitime",
                    "Exemple : Tu as souvent l'impression de ne pas mériter ta place",
                    2,
                ),
                AnswerOption::new(
                    "Constant, \"je suis une fraude\"",
                    "Exemple : Tu vis dans la peur permanente qu'on découvre que tu es un imposteur",
                    0,
                ),
            ],
        ),
        // Relational
        Question::new(
            "rela-1",
            Battery::Relational,
            "Capacité à dire non",
            vec![
                AnswerOption::new(
                    "Facile, sans culpabilité",
                    "Exemple : Tu dis non quand tu dois, sans te sentir coupable",
                    6,
                ),
                AnswerOption::new(
                    "Possible mais effort nécessaire",
                    "Exemple : Tu y arrives mais ça te coûte",
                    4,
                ),
                AnswerOption::new(
                    "Très difficile, culpabilité forte",
                    "Exemple : Tu dis oui alors que tu voulais dire non, puis tu culpabilises",
                    2,
                ),
                AnswerOption::new(
                    "Impossible, j'accepte tout",
                    "Exemple : Tu n'arrives jamais à refuser, même quand ça t'épuise",
                    0,
                ),
            ],
        ),
        Question::new(
            "rela-2",
            Battery::Relational,
            "Qualité de tes relations",
            vec![
                AnswerOption::new(
                    "Authentiques et nourrissantes",
                    "Exemple : Tes relations te ressourcent, tu peux être toi-même",
                    6,
                ),
                AnswerOption::new(
                    "Correctes mais superficielles",
                    "Exemple : Tes relations sont OK mais pas très profondes",
                    4,
                ),
                AnswerOption::new(
                    "Toxiques ou vides",
                    "Exemple : Tes relations te vident ou te font mal",
                    2,
                ),
                AnswerOption::new(
                    "Isolement total ou relations destructrices",
                    "Exemple : Tu es seul(e) ou entouré(e) de personnes toxiques",
                    0,
                ),
            ],
        ),
        Question::new(
            "rela-3",
            Battery::Relational,
            "Communication de tes besoins",
            vec![
                AnswerOption::new(
                    "Je les exprime clairement",
                    "Exemple : Tu dis ce dont tu as besoin sans détour",
                    6,
                ),
                AnswerOption::new(
                    "Parfois difficile mais j'y arrive",
                    "Exemple : Tu arrives à exprimer tes besoins après réflexion",
                    4,
                ),
                AnswerOption::new(
                    "Rarement, je garde pour moi",
                    "Exemple : Tu préfères te taire pour ne pas déranger",
                    2,
                ),
                AnswerOption::new(
                    "Jamais, personne ne sait ce que je vis",
                    "Exemple : Tu souffres en silence, personne ne sait ce que tu traverses",
                    0,
                ),
            ],
        ),
        Question::new(
            "rela-4",
            Battery::Relational,
            "Sentiment de solitude",
            vec![
                AnswerOption::new(
                    "Rarement",
                    "Exemple : Tu te sens bien connecté(e) aux autres",
                    6,
                ),
                AnswerOption::new(
                    "Occasionnel",
                    "Exemple : Parfois tu te sens seul(e) mais ça passe",
                    4,
                ),
                AnswerOption::new(
                    "Fréquent malgré l'entourage",
                    "Exemple : Même entouré(e), tu te sens incompris(e)",
                    2,
                ),
                AnswerOption::new(
                    "Constant, \"personne ne comprend\"",
                    "Exemple : Tu te sens profondément seul(e), même avec des gens autour",
                    0,
                ),
            ],
        ),
        Question::new(
            "rela-5",
            Battery::Relational,
            "People-pleasing",
            vec![
                AnswerOption::new(
                    "Je me respecte en priorité",
                    "Exemple : Tu t'occupes de toi avant de satisfaire les autres",
                    6,
                ),
                AnswerOption::new(
                    "J'aide mais je me préserve",
                    "Exemple : Tu aides les autres sans t'oublier",
                    4,
                ),
                AnswerOption::new(
                    "Je donne beaucoup, souvent trop",
                    "Exemple : Tu donnes beaucoup et tu reçois peu",
                    2,
                ),
                AnswerOption::new(
                    "Je m'oublie complètement pour les autres",
                    "Exemple : Tu es là pour tout le monde sauf pour toi",
                    0,
                ),
            ],
        ),
        // Professional
        Question::new(
            "prof-1",
            Battery::Professional,
            "Plaisir au travail",
            vec![
                AnswerOption::new(
                    "Je kiffe ce que je fais",
                    "Exemple : Tu te lèves avec envie d'aller travailler",
                    6,
                ),
                AnswerOption::new(
                    "C'est correct",
                    "Exemple : Ton travail est OK, ni super ni nul",
                    4,
                ),
                AnswerOption::new(
                    "Je survis, c'est une corvée",
                    "Exemple : Tu comptes les heures jusqu'à la fin",
                    2,
                ),
                AnswerOption::new(
                    "Dégoût total, mode zombie",
                    "Exemple : Tu es en pilote automatique, aucune tâche ne t'intéresse",
                    0,
                ),
            ],
        ),
        Question::new(
            "prof-2",
            Battery::Professional,
            "Charge de travail",
            vec![
                AnswerOption::new(
                    "Gérable et équilibrée",
                    "Exemple : Tu gères bien ta charge, pas de surcharge",
                    6,
                ),
                AnswerOption::new(
                    "Intense mais tenable",
                    "Exemple : C'est intense mais tu t'en sors",
                    4,
                ),
                AnswerOption::new(
                    "Écrasante, trop c'est trop",
                    "Exemple : Tu croules sous les tâches",
                    2,
                ),
                AnswerOption::new(
                    "Insurmontable, paralysie",
                    "Exemple : Tellement de travail que tu es paralysé(e)",
                    0,
                ),
            ],
        ),
        Question::new(
            "prof-3",
            Battery::Professional,
            "Performance",
            vec![
                AnswerOption::new(
                    "Performant(e) sans m'épuiser",
                    "Exemple : Tu es efficace sans te cramer",
                    6,
                ),
                AnswerOption::new(
                    "Performant(e) mais effort important",
                    "Exemple : Tu performes mais ça te coûte cher",
                    4,
                ),
                AnswerOption::new(
                    "Performance en chute",
                    "Exemple : Tu fais moins bien qu'avant",
                    2,
                ),
                AnswerOption::new(
                    "Hyperprésentéisme improductif",
                    "Exemple : Tu es là tout le temps mais tu ne produis plus rien",
                    0,
                ),
            ],
        ),
        Question::new(
            "prof-4",
            Battery::Professional,
            "Déconnexion travail/perso",
            vec![
                AnswerOption::new(
                    "Facile, je déconnecte",
                    "Exemple : Quand tu rentres, tu ne penses plus au travail",
                    6,
                ),
                AnswerOption::new(
                    "Possible avec effort",
                    "Exemple : Tu dois faire un effort pour décrocher",
                    4,
                ),
                AnswerOption::new(
                    "Difficile, pensées constantes",
                    "Exemple : Le travail t'obsède même le soir/weekend",
                    2,
                ),
                AnswerOption::new(
                    "Impossible, 24/7 connecté(e)",
                    "Exemple : Tu vérifies tes emails même la nuit",
                    0,
                ),
            ],
        ),
        Question::new(
            "prof-5",
            Battery::Professional,
            "Sens de ton travail",
            vec![
                AnswerOption::new(
                    "Profond et inspirant",
                    "Exemple : Ton travail a du sens, tu contribues à quelque chose d'important",
                    6,
                ),
                AnswerOption::new(
                    "Présent mais pourrait être plus fort",
                    "Exemple : Tu vois le sens mais ce n'est pas transcendant",
                    4,
                ),
                AnswerOption::new(
                    "Flou ou perdu",
                    "Exemple : Tu ne vois plus trop pourquoi tu fais ça",
                    2,
                ),
                AnswerOption::new(
                    "Zéro sens, \"je fais ça pour l'argent\"",
                    "Exemple : Perte totale de sens, tu ne sais plus à quoi bon",
                    0,
                ),
            ],
        ),
        // Spiritual
        Question::new(
            "spir-1",
            Battery::Spiritual,
            "Connexion spirituelle",
            vec![
                AnswerOption::new(
                    "Forte et vivante",
                    "Exemple : Tu te sens connecté(e) à quelque chose de plus grand",
                    6,
                ),
                AnswerOption::new(
                    "Présente mais irrégulière",
                    "Exemple : Parfois tu ressens cette connexion, parfois non",
                    4,
                ),
                AnswerOption::new(
                    "Faible, mécanique",
                    "Exemple : Tu fais les gestes mais sans présence",
                    2,
                ),
                AnswerOption::new(
                    "Totalement déconnecté(e)",
                    "Exemple : Tu ne ressens plus aucune connexion spirituelle",
                    0,
                ),
            ],
        ),
        Question::new(
            "spir-2",
            Battery::Spiritual,
            "Pratiques spirituelles",
            vec![
                AnswerOption::new(
                    "Régulières et nourrissantes",
                    "Exemple : Tu médites/pries régulièrement et ça te nourrit",
                    6,
                ),
                AnswerOption::new(
                    "Occasionnelles",
                    "Exemple : Tu pratiques de temps en temps",
                    4,
                ),
                AnswerOption::new(
                    "Rares et sans présence",
                    "Exemple : Tu pratiques rarement et machinalement",
                    2,
                ),
                AnswerOption::new(
                    "Abandonnées ou vides de sens",
                    "Exemple : Tu as arrêté ou ça ne te fait plus rien",
                    0,
                ),
            ],
        ),
        Question::new(
            "spir-3",
            Battery::Spiritual,
            "Sens existentiel",
            vec![
                AnswerOption::new(
                    "\"Je sais pourquoi je suis ici\"",
                    "Exemple : Tu as une mission claire, tu sais pourquoi tu es sur Terre",
                    6,
                ),
                AnswerOption::new(
                    "\"J'ai une idée de ma mission\"",
                    "Exemple : Tu as une intuition de ta mission mais c'est flou",
                    4,
                ),
                AnswerOption::new(
                    "\"Je cherche encore\"",
                    "Exemple : Tu cherches ton sens sans vraiment trouver",
                    2,
                ),
                AnswerOption::new(
                    "\"Aucune idée, tout est vide\"",
                    "Exemple : Vide existentiel, tu ne sais plus pourquoi tu es là",
                    0,
                ),
            ],
        ),
        Question::new(
            "spir-4",
            Battery::Spiritual,
            "Guidance intérieure",
            vec![
                AnswerOption::new(
                    "Claire et fiable",
                    "Exemple : Tu entends ta voix intérieure clairement et tu lui fais confiance",
                    6,
                ),
                AnswerOption::new(
                    "Présente mais faible",
                    "Exemple : Tu l'entends parfois mais c'est léger",
                    4,
                ),
                AnswerOption::new(
                    "Confuse, j'ai du mal à l'entendre",
                    "Exemple : Tu ne sais plus distinguer ta voix intérieure du bruit",
                    2,
                ),
                AnswerOption::new(
                    "Totalement perdue, aucune boussole",
                    "Exemple : Tu n'entends plus rien, tu es complètement perdu(e)",
                    0,
                ),
            ],
        ),
        Question::new(
            "spir-5",
            Battery::Spiritual,
            "Foi/Confiance",
            vec![
                AnswerOption::new(
                    "Confiance totale en la vie/Dieu",
                    "Exemple : Tu as une foi inébranlable, tu fais confiance",
                    6,
                ),
                AnswerOption::new(
                    "Confiance globale avec doutes",
                    "Exemple : Tu fais confiance même si parfois tu doutes",
                    4,
                ),
                AnswerOption::new(
                    "Doutes fréquents",
                    "Exemple : Tu doutes souvent de tout",
                    2,
                ),
                AnswerOption::new(
                    "Perte de foi complète",
                    "Exemple : Tu as perdu la foi, tu ne crois plus en rien",
                    0,
                ),
            ],
        ),
    ]
}
